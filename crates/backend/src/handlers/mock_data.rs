use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a025_inventory_item::InventoryItem;
use contracts::domain::a026_customer_order::Order;
use std::sync::Arc;

use crate::shared::mock_data::MockData;

/// GET /mockInventory.json
pub async fn inventory(
    State(data): State<Arc<MockData>>,
) -> Result<Json<Vec<InventoryItem>>, StatusCode> {
    data.inventory
        .clone()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// GET /mockOrders.json
pub async fn orders(State(data): State<Arc<MockData>>) -> Result<Json<Vec<Order>>, StatusCode> {
    data.orders.clone().map(Json).ok_or(StatusCode::NOT_FOUND)
}
