//! Status + search filtering of the inventory list

use crate::shared::list_utils::{filter_list, Searchable};
use contracts::domain::a025_inventory_item::InventoryItem;
use contracts::enums::InventoryStatus;

pub const ALL_STATUSES: &str = "All";

/// Значение фильтра по статусу: "All" или один из известных статусов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InventoryStatus),
}

impl StatusFilter {
    /// Unknown values give `None` so they never reach the view state
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_STATUSES {
            return Some(StatusFilter::All);
        }
        InventoryStatus::parse(value).map(StatusFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Options of the status dropdown, "All" first
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(InventoryStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    /// An item without a status only passes `All`
    pub fn accepts(&self, item: &InventoryItem) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => item.status.as_deref() == Some(status.as_str()),
        }
    }
}

impl Searchable for InventoryItem {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.item.to_lowercase().contains(filter_lower)
    }
}

/// Rows of `items` that pass the status filter and whose name contains
/// `search_text` (case-insensitive), in their original order.
pub fn filter_inventory(
    items: &[InventoryItem],
    status_filter: StatusFilter,
    search_text: &str,
) -> Vec<InventoryItem> {
    filter_list(
        items.iter().filter(|item| status_filter.accepts(item)),
        search_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: i64, name: &str, status: Option<&str>) -> InventoryItem {
        InventoryItem {
            id,
            item: name.to_string(),
            category: "Hardware".to_string(),
            stock: 10.0,
            unit: "pcs".to_string(),
            status: status.map(str::to_string),
            deadline: None,
        }
    }

    fn ids(rows: &[InventoryItem]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    fn bolts() -> Vec<InventoryItem> {
        vec![
            item(1, "Bolt", Some("Completed")),
            item(2, "Bolt Washer", Some("Delayed")),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_and_keeps_order() {
        let rows = filter_inventory(&bolts(), StatusFilter::All, "bolt");
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_status_filter_with_empty_search() {
        let filter = StatusFilter::parse("Completed").unwrap();
        let rows = filter_inventory(&bolts(), filter, "");
        assert_eq!(ids(&rows), vec![1]);
    }

    #[test]
    fn test_missing_status_only_matches_all() {
        let items = vec![item(1, "Gear", None), item(2, "Gear", Some("In Progress"))];
        for filter in StatusFilter::options() {
            let rows = filter_inventory(&items, filter, "");
            match filter {
                StatusFilter::All => assert_eq!(ids(&rows), vec![1, 2]),
                StatusFilter::Only(InventoryStatus::InProgress) => assert_eq!(ids(&rows), vec![2]),
                StatusFilter::Only(_) => assert!(rows.is_empty()),
            }
        }
    }

    #[test]
    fn test_search_miss_and_empty_input() {
        assert!(filter_inventory(&bolts(), StatusFilter::All, "nut").is_empty());
        assert!(filter_inventory(&[], StatusFilter::All, "").is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(StatusFilter::parse("All"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("all"), None);
        assert_eq!(StatusFilter::parse("On Hold"), None);
        assert_eq!(
            StatusFilter::options().iter().map(|f| f.as_str()).collect::<Vec<_>>(),
            vec!["All", "In Progress", "Completed", "Delayed"]
        );
    }

    fn arb_item() -> impl Strategy<Value = InventoryItem> {
        (
            0i64..1000,
            "[a-zA-Z ]{0,8}",
            prop::option::of(prop_oneof![
                Just("In Progress"),
                Just("Completed"),
                Just("Delayed"),
                Just("Unknown"),
            ]),
        )
            .prop_map(|(id, name, status)| item(id, &name, status))
    }

    fn arb_filter() -> impl Strategy<Value = StatusFilter> {
        prop::sample::select(StatusFilter::options())
    }

    proptest! {
        #[test]
        fn prop_output_is_exactly_the_matching_subsequence(
            items in prop::collection::vec(arb_item(), 0..30),
            filter in arb_filter(),
            search in "[a-zA-Z]{0,3}",
        ) {
            let expected: Vec<InventoryItem> = items
                .iter()
                .filter(|i| {
                    let status_ok = filter == StatusFilter::All
                        || i.status.as_deref() == Some(filter.as_str());
                    let search_ok = search.is_empty()
                        || i.item.to_lowercase().contains(&search.to_lowercase());
                    status_ok && search_ok
                })
                .cloned()
                .collect();
            prop_assert_eq!(filter_inventory(&items, filter, &search), expected);
        }

        #[test]
        fn prop_filter_is_idempotent(
            items in prop::collection::vec(arb_item(), 0..30),
            filter in arb_filter(),
            search in "[a-zA-Z]{0,3}",
        ) {
            let once = filter_inventory(&items, filter, &search);
            let twice = filter_inventory(&once, filter, &search);
            prop_assert_eq!(once, twice);
        }
    }
}
