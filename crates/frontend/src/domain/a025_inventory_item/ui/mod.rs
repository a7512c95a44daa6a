pub mod list;

pub use list::InventoryTable;
