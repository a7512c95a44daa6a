//! View state of the Smart Automation dashboard
//!
//! `DashboardController` is the only owner of the view parameters and of both
//! collections. Every user action goes through one of its event methods; the
//! rows shown on screen are recomputed from scratch on each read, so they can
//! never drift from the data they were derived from.

use super::tabs::DashboardTab;
use crate::domain::a025_inventory_item::filter::{filter_inventory, StatusFilter};
use crate::shared::api_utils::FetchError;
use crate::shared::collection_store::CollectionStore;
use crate::shared::list_utils::{paginate, total_pages};
use contracts::domain::a025_inventory_item::InventoryItem;
use contracts::domain::a026_customer_order::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

pub const DEFAULT_ORDERS_PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active_tab: DashboardTab,
    pub inventory_status_filter: StatusFilter,
    pub inventory_search_text: String,
    // Pagination fields (orders only)
    pub orders_page_index: usize,
    pub orders_page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::Inventory,
            inventory_status_filter: StatusFilter::All,
            inventory_search_text: String::new(),
            orders_page_index: 0,
            orders_page_size: DEFAULT_ORDERS_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardController {
    view: ViewState,
    items: CollectionStore<InventoryItem>,
    orders: CollectionStore<Order>,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller whose orders table starts at `page_size` rows per page.
    /// Zero falls back to the default.
    pub fn with_page_size(page_size: usize) -> Self {
        let mut controller = Self::new();
        if page_size > 0 {
            controller.view.orders_page_size = page_size;
        }
        controller
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ---- fetch completion ----

    /// A failed fetch keeps whatever the store held before.
    pub fn on_inventory_loaded(&mut self, result: Result<Vec<InventoryItem>, FetchError>) {
        match result {
            Ok(items) => self.items.populate(items),
            Err(e) => log::error!("Error fetching inventory: {}", e),
        }
    }

    pub fn on_orders_loaded(&mut self, result: Result<Vec<Order>, FetchError>) {
        match result {
            Ok(orders) => self.orders.populate(orders),
            Err(e) => log::error!("Error fetching orders: {}", e),
        }
    }

    // ---- user events ----

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.view.inventory_search_text = text.into();
    }

    /// Accepts "All" or a known inventory status; anything else is ignored.
    pub fn set_status_filter(&mut self, value: &str) -> bool {
        match StatusFilter::parse(value) {
            Some(filter) => {
                self.view.inventory_status_filter = filter;
                true
            }
            None => {
                log::warn!("Ignoring unknown inventory status filter: {:?}", value);
                false
            }
        }
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.view.active_tab = tab;
    }

    pub fn set_orders_page(&mut self, page: usize) {
        self.view.orders_page_index = page;
    }

    /// Changing the page size always returns to the first page, otherwise the
    /// old index could point past the end of the data.
    pub fn set_orders_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            log::warn!("Ignoring zero orders page size");
            return false;
        }
        self.view.orders_page_size = page_size;
        self.view.orders_page_index = 0;
        true
    }

    /// Replace the status of the order with `order_id`. An unknown id
    /// changes nothing.
    pub fn update_order_status(&mut self, order_id: i64, status: OrderStatus) -> bool {
        self.orders
            .update_first(|order| order.id == order_id, |order| order.status = status)
    }

    /// String form used by the status dropdown
    pub fn update_order_status_str(&mut self, order_id: i64, status: &str) -> bool {
        match OrderStatus::parse(status) {
            Some(status) => self.update_order_status(order_id, status),
            None => {
                log::warn!("Ignoring unknown order status: {:?}", status);
                false
            }
        }
    }

    // ---- derived projections ----

    pub fn visible_inventory_rows(&self) -> Vec<InventoryItem> {
        filter_inventory(
            self.items.rows(),
            self.view.inventory_status_filter,
            &self.view.inventory_search_text,
        )
    }

    pub fn visible_orders_rows(&self) -> Vec<Order> {
        paginate(
            self.orders.rows(),
            self.view.orders_page_index,
            self.view.orders_page_size,
        )
        .to_vec()
    }

    pub fn orders_total_count(&self) -> usize {
        self.orders.len()
    }

    pub fn orders_total_pages(&self) -> usize {
        total_pages(self.orders_total_count(), self.view.orders_page_size)
    }

    pub fn is_inventory_loaded(&self) -> bool {
        self.items.is_loaded()
    }

    pub fn is_orders_loaded(&self) -> bool {
        self.orders.is_loaded()
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.rows()
    }
}

/// Create state signal
pub fn create_state(page_size: usize) -> RwSignal<DashboardController> {
    RwSignal::new(DashboardController::with_page_size(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, status: &str) -> InventoryItem {
        InventoryItem {
            id,
            item: name.to_string(),
            category: "Hardware".to_string(),
            stock: 100.0,
            unit: "pcs".to_string(),
            status: Some(status.to_string()),
            deadline: Some("2024-06-30".to_string()),
        }
    }

    fn order(id: i64) -> Order {
        Order {
            id,
            customer_name: format!("Customer {}", id),
            product: "Bolt".to_string(),
            quantity: 10,
            status: OrderStatus::Pending,
            order_date: "2024-03-15".to_string(),
        }
    }

    fn with_bolts() -> DashboardController {
        let mut c = DashboardController::new();
        c.on_inventory_loaded(Ok(vec![
            item(1, "Bolt", "Completed"),
            item(2, "Bolt Washer", "Delayed"),
        ]));
        c
    }

    fn with_orders(n: i64) -> DashboardController {
        let mut c = DashboardController::new();
        c.on_orders_loaded(Ok((1..=n).map(order).collect()));
        c
    }

    fn inventory_ids(c: &DashboardController) -> Vec<i64> {
        c.visible_inventory_rows().iter().map(|r| r.id).collect()
    }

    fn order_ids(c: &DashboardController) -> Vec<i64> {
        c.visible_orders_rows().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_defaults() {
        let c = DashboardController::new();
        assert_eq!(c.view(), &ViewState::default());
        assert_eq!(c.view().active_tab, DashboardTab::Inventory);
        assert_eq!(c.view().inventory_status_filter, StatusFilter::All);
        assert_eq!(c.view().inventory_search_text, "");
        assert_eq!(c.view().orders_page_index, 0);
        assert_eq!(c.view().orders_page_size, 5);
        assert!(!c.is_inventory_loaded());
        assert!(!c.is_orders_loaded());
        assert!(c.visible_inventory_rows().is_empty());
        assert_eq!(c.orders_total_count(), 0);
    }

    #[test]
    fn test_scenario_search_all() {
        let mut c = with_bolts();
        c.set_search_text("bolt");
        assert_eq!(inventory_ids(&c), vec![1, 2]);
    }

    #[test]
    fn test_scenario_status_filter() {
        let mut c = with_bolts();
        assert!(c.set_status_filter("Completed"));
        assert_eq!(inventory_ids(&c), vec![1]);
    }

    #[test]
    fn test_scenario_second_page() {
        let mut c = with_orders(7);
        c.set_orders_page(1);
        assert_eq!(order_ids(&c), vec![6, 7]);
        assert_eq!(c.orders_total_count(), 7);
        assert_eq!(c.orders_total_pages(), 2);
    }

    #[test]
    fn test_scenario_status_update() {
        let mut c = with_orders(3);
        let before = c.orders().to_vec();

        assert!(c.update_order_status(2, OrderStatus::Shipped));
        assert_eq!(c.orders()[1].status, OrderStatus::Shipped);
        assert_eq!(c.orders()[0], before[0]);
        assert_eq!(c.orders()[2], before[2]);
        assert_eq!(
            Order { status: OrderStatus::Pending, ..c.orders()[1].clone() },
            before[1]
        );

        let after_hit = c.orders().to_vec();
        assert!(!c.update_order_status(99, OrderStatus::Shipped));
        assert_eq!(c.orders(), after_hit.as_slice());
        assert_eq!(c.orders_total_count(), 3);
    }

    #[test]
    fn test_unknown_status_string_is_rejected() {
        let mut c = with_orders(3);
        let before = c.orders().to_vec();
        assert!(!c.update_order_status_str(1, "Cancelled"));
        assert_eq!(c.orders(), before.as_slice());
        assert!(c.update_order_status_str(1, "Processing"));
        assert_eq!(c.orders()[0].status, OrderStatus::Processing);
    }

    #[test]
    fn test_unknown_filter_keeps_previous() {
        let mut c = with_bolts();
        assert!(c.set_status_filter("Delayed"));
        assert!(!c.set_status_filter("On Hold"));
        assert_eq!(
            c.view().inventory_status_filter,
            StatusFilter::parse("Delayed").unwrap()
        );
        assert_eq!(inventory_ids(&c), vec![2]);
        assert!(c.set_status_filter("All"));
        assert_eq!(inventory_ids(&c), vec![1, 2]);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut c = with_orders(30);
        c.set_orders_page(4);
        assert!(c.set_orders_page_size(10));
        assert_eq!(c.view().orders_page_index, 0);
        assert_eq!(c.view().orders_page_size, 10);
        assert_eq!(order_ids(&c), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_page_size_ignored() {
        let mut c = with_orders(30);
        c.set_orders_page(2);
        assert!(!c.set_orders_page_size(0));
        assert_eq!(c.view().orders_page_index, 2);
        assert_eq!(c.view().orders_page_size, 5);
    }

    #[test]
    fn test_stale_page_renders_empty() {
        let mut c = with_orders(7);
        c.set_orders_page(5);
        assert!(c.visible_orders_rows().is_empty());
        assert_eq!(c.orders_total_count(), 7);
    }

    #[test]
    fn test_tab_switch_does_not_touch_other_state() {
        let mut c = with_bolts();
        c.set_search_text("washer");
        c.select_tab(DashboardTab::Orders);
        assert_eq!(c.view().active_tab, DashboardTab::Orders);
        assert_eq!(inventory_ids(&c), vec![2]);
        c.select_tab(DashboardTab::Inventory);
        assert_eq!(c.view().active_tab, DashboardTab::Inventory);
    }

    #[test]
    fn test_fetch_failure_keeps_store() {
        let mut c = DashboardController::new();
        c.on_orders_loaded(Err(FetchError::Status(500)));
        assert!(!c.is_orders_loaded());

        c.on_orders_loaded(Ok(vec![order(1)]));
        c.on_orders_loaded(Err(FetchError::Request("offline".into())));
        assert!(c.is_orders_loaded());
        assert_eq!(order_ids(&c), vec![1]);
    }

    #[test]
    fn test_loads_arrive_in_any_order() {
        let mut c = DashboardController::new();
        c.on_orders_loaded(Ok(vec![order(1), order(2)]));
        assert!(c.is_orders_loaded());
        assert!(!c.is_inventory_loaded());

        c.on_inventory_loaded(Ok(Vec::new()));
        assert!(c.is_inventory_loaded());
        assert!(c.visible_inventory_rows().is_empty());
        assert_eq!(order_ids(&c), vec![1, 2]);
    }

    #[test]
    fn test_projections_follow_source_changes() {
        let mut c = with_orders(6);
        c.set_orders_page(1);
        assert_eq!(order_ids(&c), vec![6]);
        c.update_order_status(6, OrderStatus::Shipped);
        assert_eq!(c.visible_orders_rows()[0].status, OrderStatus::Shipped);
    }

    #[test]
    fn test_with_page_size() {
        assert_eq!(DashboardController::with_page_size(10).view().orders_page_size, 10);
        assert_eq!(DashboardController::with_page_size(0).view().orders_page_size, 5);
    }
}
