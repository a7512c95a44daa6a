pub mod list;

pub use list::OrdersTable;
