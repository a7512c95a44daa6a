pub mod inventory_status;
pub mod order_status;

pub use inventory_status::InventoryStatus;
pub use order_status::OrderStatus;
