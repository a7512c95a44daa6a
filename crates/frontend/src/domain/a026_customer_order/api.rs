use crate::shared::api_utils::{fetch_json_list, FetchError};
use contracts::domain::a026_customer_order::Order;

/// Загрузить заказы покупателей
pub async fn fetch_orders(url: &str) -> Result<Vec<Order>, FetchError> {
    let orders = fetch_json_list::<Order>(url).await?;
    log::info!("Orders data: {} orders", orders.len());
    Ok(orders)
}
