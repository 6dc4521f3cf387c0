use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::transaction::Transaction;

// Request para crear una transacción
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 50))]
    pub transaction_type: String,

    pub amount: Decimal,

    #[validate(length(min = 1, max = 500))]
    pub description: String,

    pub transaction_date: NaiveDate,
}

// Filtros para listar transacciones
#[derive(Debug, Deserialize)]
pub struct TransactionFilters {
    pub vehicle_id: Option<Uuid>,
}

// Response de transacción
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub transaction_type: String,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            vehicle_id: tx.vehicle_id,
            transaction_type: tx.transaction_type,
            amount: tx.amount,
            description: tx.description,
            transaction_date: tx.transaction_date,
            created_at: tx.created_at,
        }
    }
}
