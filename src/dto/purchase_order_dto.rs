use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::purchase_order::{PurchaseOrder, PurchaseOrderItem};

// Item dentro de una orden de compra nueva
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub description: String,

    pub quantity: Decimal,

    pub unit_price: Decimal,
}

// Request para crear una orden de compra con sus items
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderRequest {
    #[validate(length(min = 1, max = 150))]
    pub supplier: String,

    pub order_date: NaiveDate,

    pub status: Option<String>,

    #[validate]
    pub items: Vec<CreatePurchaseOrderItemRequest>,
}

// Request para actualizar una orden de compra
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePurchaseOrderRequest {
    #[validate(length(min = 1, max = 150))]
    pub supplier: Option<String>,

    pub order_date: Option<NaiveDate>,

    pub status: Option<String>,
}

// Response de item de orden de compra
#[derive(Debug, Serialize)]
pub struct PurchaseOrderItemResponse {
    pub id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl From<PurchaseOrderItem> for PurchaseOrderItemResponse {
    fn from(item: PurchaseOrderItem) -> Self {
        let subtotal = item.quantity * item.unit_price;
        Self {
            id: item.id,
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal,
        }
    }
}

// Response de orden de compra con items y total calculado
#[derive(Debug, Serialize)]
pub struct PurchaseOrderResponse {
    pub id: Uuid,
    pub supplier: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub total_amount: Decimal,
    pub items: Vec<PurchaseOrderItemResponse>,
    pub created_at: DateTime<Utc>,
}

impl PurchaseOrderResponse {
    pub fn from_parts(order: PurchaseOrder, items: Vec<PurchaseOrderItem>) -> Self {
        let items: Vec<PurchaseOrderItemResponse> =
            items.into_iter().map(PurchaseOrderItemResponse::from).collect();
        let total_amount = items.iter().map(|i| i.subtotal).sum();
        Self {
            id: order.id,
            supplier: order.supplier,
            order_date: order.order_date,
            status: order.status,
            total_amount,
            items,
            created_at: order.created_at,
        }
    }
}
