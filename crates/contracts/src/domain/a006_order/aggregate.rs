use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiRecord, EntityMetadata};
use crate::enums::OrderStatus;

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    #[serde(default)]
    pub prescription_id: Option<i64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Order {
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn grand_total(&self) -> f64 {
        self.items_total() + self.delivery_fee
    }
}

impl ApiRecord for Order {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
