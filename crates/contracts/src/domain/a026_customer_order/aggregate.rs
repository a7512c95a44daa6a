use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Заказ покупателя (агрегат a026)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Уникален в пределах коллекции
    pub id: i64,
    pub customer_name: String,
    pub product: String,
    pub quantity: u32,
    /// Единственное поле, которое меняется после загрузки
    pub status: OrderStatus,
    /// Дата заказа (YYYY-MM-DD)
    pub order_date: String,
}
