//! Dashboard configuration
//!
//! The frontend has no config file on disk, so the settings are embedded as
//! TOML and parsed on startup. Keeping them in TOML lets the data endpoints and
//! paging defaults change without touching the code that uses them.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub orders: OrdersConfig,
}

/// Where the two collections are fetched from
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataConfig {
    pub inventory_url: String,
    pub orders_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrdersConfig {
    /// Initial rows per page
    pub page_size: usize,
    /// Choices offered by the rows-per-page selector
    pub page_size_options: Vec<usize>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
inventory_url = "/mockInventory.json"
orders_url = "/mockOrders.json"

[orders]
page_size = 5
page_size_options = [5, 10, 25]
"#;

/// Load the embedded configuration
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

/// Parse and validate a configuration document
pub fn parse_config(source: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(source)?;

    if config.orders.page_size == 0 {
        return Err(ConfigError::Invalid("orders.page_size must be positive".into()));
    }
    if config.orders.page_size_options.is_empty() {
        return Err(ConfigError::Invalid(
            "orders.page_size_options must not be empty".into(),
        ));
    }
    if config.orders.page_size_options.contains(&0) {
        return Err(ConfigError::Invalid(
            "orders.page_size_options must be positive".into(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.data.inventory_url, "/mockInventory.json");
        assert_eq!(config.data.orders_url, "/mockOrders.json");
        assert_eq!(config.orders.page_size, 5);
        assert_eq!(config.orders.page_size_options, vec![5, 10, 25]);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let source = DEFAULT_CONFIG.replace("page_size = 5", "page_size = 0");
        assert!(matches!(parse_config(&source), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_options_rejected() {
        let source = DEFAULT_CONFIG.replace("[5, 10, 25]", "[]");
        assert!(matches!(parse_config(&source), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_syntax_error_reported() {
        assert!(matches!(
            parse_config("[data\ninventory_url ="),
            Err(ConfigError::Parse(_))
        ));
    }
}
