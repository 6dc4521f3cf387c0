use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::transaction::Transaction;
use crate::utils::errors::{AppError, AppResult};

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Option<Uuid>,
        transaction_type: String,
        amount: Decimal,
        description: String,
        transaction_date: NaiveDate,
    ) -> AppResult<Transaction> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (id, vehicle_id, transaction_type, amount, description, transaction_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(transaction_type)
        .bind(amount)
        .bind(description)
        .bind(transaction_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    pub async fn find_all(&self, vehicle_id: Option<Uuid>) -> AppResult<Vec<Transaction>> {
        let transactions = match vehicle_id {
            Some(vehicle_id) => {
                sqlx::query_as::<_, Transaction>(
                    r#"
                    SELECT * FROM transactions
                    WHERE vehicle_id = $1
                    ORDER BY transaction_date DESC, created_at DESC
                    "#,
                )
                .bind(vehicle_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Transaction>(
                    "SELECT * FROM transactions ORDER BY transaction_date DESC, created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(transactions)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        Ok(())
    }
}
