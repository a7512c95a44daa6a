/// Вкладки дашборда. Переход между ними ничем не ограничен.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Inventory,
    Orders,
}

impl DashboardTab {
    pub fn all() -> [DashboardTab; 2] {
        [DashboardTab::Inventory, DashboardTab::Orders]
    }

    /// Ключ для `thaw::TabList`
    pub fn value(&self) -> &'static str {
        match self {
            DashboardTab::Inventory => "inventory",
            DashboardTab::Orders => "orders",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "inventory" => Some(DashboardTab::Inventory),
            "orders" => Some(DashboardTab::Orders),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Inventory => "Inventory & Production",
            DashboardTab::Orders => "Order Management",
        }
    }

    /// Заголовок панели под вкладками
    pub fn heading(&self) -> &'static str {
        match self {
            DashboardTab::Inventory => "Inventory & Production Planning",
            DashboardTab::Orders => "Order Management System",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for tab in DashboardTab::all() {
            assert_eq!(DashboardTab::from_value(tab.value()), Some(tab));
        }
        assert_eq!(DashboardTab::from_value("reports"), None);
    }

    #[test]
    fn test_default_is_inventory() {
        assert_eq!(DashboardTab::default(), DashboardTab::Inventory);
    }
}
