use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::purchase_order::{PurchaseOrder, PurchaseOrderItem};
use crate::utils::errors::{AppError, AppResult};

pub struct PurchaseOrderRepository {
    pool: PgPool,
}

impl PurchaseOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea la orden y sus items en una sola transacción
    pub async fn create(
        &self,
        supplier: String,
        order_date: NaiveDate,
        status: String,
        items: Vec<(String, Decimal, Decimal)>,
    ) -> AppResult<(PurchaseOrder, Vec<PurchaseOrderItem>)> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            INSERT INTO fleet_purchase_orders (id, supplier, order_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(supplier)
        .bind(order_date)
        .bind(status)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let mut inserted_items = Vec::with_capacity(items.len());
        for (description, quantity, unit_price) in items {
            let item = sqlx::query_as::<_, PurchaseOrderItem>(
                r#"
                INSERT INTO purchase_order_items (id, purchase_order_id, description, quantity, unit_price)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(description)
            .bind(quantity)
            .bind(unit_price)
            .fetch_one(&mut *tx)
            .await?;
            inserted_items.push(item);
        }

        tx.commit().await?;

        Ok((order, inserted_items))
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> AppResult<Option<(PurchaseOrder, Vec<PurchaseOrderItem>)>> {
        let order =
            sqlx::query_as::<_, PurchaseOrder>("SELECT * FROM fleet_purchase_orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let order = match order {
            Some(order) => order,
            None => return Ok(None),
        };

        let items = sqlx::query_as::<_, PurchaseOrderItem>(
            "SELECT * FROM purchase_order_items WHERE purchase_order_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((order, items)))
    }

    pub async fn find_all(&self) -> AppResult<Vec<(PurchaseOrder, Vec<PurchaseOrderItem>)>> {
        let orders = sqlx::query_as::<_, PurchaseOrder>(
            "SELECT * FROM fleet_purchase_orders ORDER BY order_date DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        let items = sqlx::query_as::<_, PurchaseOrderItem>(
            "SELECT * FROM purchase_order_items WHERE purchase_order_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<PurchaseOrderItem>> = HashMap::new();
        for item in items {
            grouped.entry(item.purchase_order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = grouped.remove(&order.id).unwrap_or_default();
                (order, items)
            })
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        supplier: Option<String>,
        order_date: Option<NaiveDate>,
        status: Option<String>,
    ) -> AppResult<PurchaseOrder> {
        let current =
            sqlx::query_as::<_, PurchaseOrder>("SELECT * FROM fleet_purchase_orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound("Purchase order not found".to_string()))?;

        let order = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            UPDATE fleet_purchase_orders
            SET supplier = $2, order_date = $3, status = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(supplier.unwrap_or(current.supplier))
        .bind(order_date.unwrap_or(current.order_date))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM purchase_order_items WHERE purchase_order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM fleet_purchase_orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Purchase order not found".to_string()));
        }

        tx.commit().await?;

        Ok(())
    }
}
