use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::odometer::OdometerLog;
use crate::utils::errors::AppResult;

pub struct OdometerRepository {
    pool: PgPool,
}

impl OdometerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apendiza una lectura y actualiza el current_odometer del vehículo
    /// en una sola transacción. La actualización es incondicional: no se
    /// valida monotonicidad respecto de la lectura anterior.
    pub async fn append(
        &self,
        vehicle_id: Uuid,
        reading: Decimal,
        source: &str,
    ) -> AppResult<(OdometerLog, Decimal)> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let log = sqlx::query_as::<_, OdometerLog>(
            r#"
            INSERT INTO odometer_logs (id, vehicle_id, reading, source, logged_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(reading)
        .bind(source)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let updated: (Decimal,) = sqlx::query_as(
            r#"
            UPDATE vehicles SET current_odometer = $2, updated_at = $3
            WHERE id = $1
            RETURNING current_odometer
            "#,
        )
        .bind(vehicle_id)
        .bind(reading)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((log, updated.0))
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<OdometerLog>> {
        let logs = sqlx::query_as::<_, OdometerLog>(
            r#"
            SELECT * FROM odometer_logs
            WHERE vehicle_id = $1
            ORDER BY logged_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
