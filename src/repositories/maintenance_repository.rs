use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::{LatestMaintenance, MaintenanceRecord};
use crate::models::odometer::OdometerSource;
use crate::utils::errors::AppResult;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta un registro de mantenimiento. Si trae odómetro del servicio,
    /// en la misma transacción se apendiza un odometer_log con source
    /// 'service' y se actualiza el current_odometer del vehículo.
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        service_date: NaiveDate,
        odometer_at_service: Option<Decimal>,
        description: String,
        total_cost: Decimal,
        next_due_date: Option<NaiveDate>,
        next_due_odometer: Option<Decimal>,
    ) -> AppResult<MaintenanceRecord> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records
                (id, vehicle_id, service_date, odometer_at_service, description, total_cost, next_due_date, next_due_odometer, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(service_date)
        .bind(odometer_at_service)
        .bind(description)
        .bind(total_cost)
        .bind(next_due_date)
        .bind(next_due_odometer)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(reading) = odometer_at_service {
            sqlx::query(
                r#"
                INSERT INTO odometer_logs (id, vehicle_id, reading, source, logged_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(vehicle_id)
            .bind(reading)
            .bind(OdometerSource::Service.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE vehicles SET current_odometer = $2, updated_at = $3 WHERE id = $1")
                .bind(vehicle_id)
                .bind(reading)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(record)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<MaintenanceRecord>> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT * FROM maintenance_records
            WHERE vehicle_id = $1
            ORDER BY service_date DESC, created_at DESC, id DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Último registro de un vehículo. Desempate determinista para fechas
    /// de servicio iguales: created_at y luego id, descendentes.
    pub async fn latest_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<Option<LatestMaintenance>> {
        let latest = sqlx::query_as::<_, LatestMaintenance>(
            r#"
            SELECT vehicle_id, service_date, next_due_date, next_due_odometer
            FROM maintenance_records
            WHERE vehicle_id = $1
            ORDER BY service_date DESC, created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(latest)
    }

    /// Último registro por vehículo, para anotar el listado completo
    /// en una sola consulta.
    pub async fn latest_per_vehicle(&self) -> AppResult<Vec<LatestMaintenance>> {
        let latest = sqlx::query_as::<_, LatestMaintenance>(
            r#"
            SELECT DISTINCT ON (vehicle_id)
                vehicle_id, service_date, next_due_date, next_due_odometer
            FROM maintenance_records
            ORDER BY vehicle_id, service_date DESC, created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(latest)
    }
}
