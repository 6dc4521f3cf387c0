//! Modelo de Transaction
//!
//! Movimientos financieros de la flota (combustible, reparaciones, compras).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Transaction - mapea exactamente a la tabla transactions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub transaction_type: String,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
