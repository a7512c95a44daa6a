use serde::{Deserialize, Serialize};

/// Статусы производства позиции склада
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
}

impl InventoryStatus {
    /// Строковое значение, как оно приходит в данных
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::InProgress => "In Progress",
            InventoryStatus::Completed => "Completed",
            InventoryStatus::Delayed => "Delayed",
        }
    }

    pub fn all() -> Vec<InventoryStatus> {
        vec![
            InventoryStatus::InProgress,
            InventoryStatus::Completed,
            InventoryStatus::Delayed,
        ]
    }

    /// Парсинг из строки (точное совпадение)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "In Progress" => Some(InventoryStatus::InProgress),
            "Completed" => Some(InventoryStatus::Completed),
            "Delayed" => Some(InventoryStatus::Delayed),
            _ => None,
        }
    }
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
