//! Datasets served to the dashboard
//!
//! Files are read once at startup and checked against the shared record
//! shapes, so the frontend never receives a record it cannot parse.

use anyhow::Context;
use contracts::domain::a025_inventory_item::InventoryItem;
use contracts::domain::a026_customer_order::Order;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

pub const INVENTORY_FILE: &str = "mockInventory.json";
pub const ORDERS_FILE: &str = "mockOrders.json";

/// Loaded datasets. `None` means the file is absent and the route answers 404.
#[derive(Debug, Clone, Default)]
pub struct MockData {
    pub inventory: Option<Vec<InventoryItem>>,
    pub orders: Option<Vec<Order>>,
}

impl MockData {
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let inventory = load_list::<InventoryItem>(&dir.join(INVENTORY_FILE))?;
        if let Some(items) = &inventory {
            ensure_unique_ids(items.iter().map(|i| i.id)).context(INVENTORY_FILE)?;
        }

        let orders = load_list::<Order>(&dir.join(ORDERS_FILE))?;
        if let Some(orders) = &orders {
            ensure_unique_ids(orders.iter().map(|o| o.id)).context(ORDERS_FILE)?;
        }

        Ok(Self { inventory, orders })
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<Vec<T>>> {
    if !path.exists() {
        tracing::warn!("Dataset not found: {}", path.display());
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rows: Vec<T> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::info!("Loaded {} records from {}", rows.len(), path.display());
    Ok(Some(rows))
}

fn ensure_unique_ids(ids: impl Iterator<Item = i64>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("duplicate id {}", id);
        }
    }
    Ok(())
}
