use crate::shared::api_utils::{fetch_json_list, FetchError};
use contracts::domain::a025_inventory_item::InventoryItem;

/// Загрузить складские позиции
pub async fn fetch_inventory(url: &str) -> Result<Vec<InventoryItem>, FetchError> {
    let items = fetch_json_list::<InventoryItem>(url).await?;
    log::info!("Inventory data: {} items", items.len());
    Ok(items)
}
