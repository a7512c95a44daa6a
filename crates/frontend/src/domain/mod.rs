pub mod a025_inventory_item;
pub mod a026_customer_order;
