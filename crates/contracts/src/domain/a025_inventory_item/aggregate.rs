use serde::{Deserialize, Serialize};

/// Placeholder shown for an absent optional field
pub const MISSING_VALUE: &str = "N/A";

/// Позиция склада / производственного плана (агрегат a025)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Уникален в пределах коллекции
    pub id: i64,

    /// Наименование позиции, по нему работает поиск
    pub item: String,

    pub category: String,

    /// Остаток в единицах `unit`
    pub stock: f64,

    pub unit: String,

    /// Статус производства ("In Progress" | "Completed" | "Delayed").
    /// Хранится строкой: неизвестные значения не ломают загрузку.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Срок (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl InventoryItem {
    /// Пустая строка отображается так же, как отсутствующее значение
    pub fn status_display(&self) -> &str {
        display_or_missing(self.status.as_deref())
    }

    pub fn deadline_display(&self) -> &str {
        display_or_missing(self.deadline.as_deref())
    }

    /// Остаток вместе с единицей измерения, например "120 pcs"
    pub fn stock_display(&self) -> String {
        format!("{} {}", self.stock, self.unit)
    }
}

fn display_or_missing(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or(MISSING_VALUE)
}
