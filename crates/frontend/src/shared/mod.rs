pub mod api_utils;
pub mod collection_store;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
