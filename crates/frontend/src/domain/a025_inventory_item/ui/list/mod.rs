use crate::shared::list_utils::highlight_matches;
use contracts::domain::a025_inventory_item::InventoryItem;
use leptos::prelude::*;
use thaw::*;

const COLUMNS: usize = 5;

/// Inventory table. Rows arrive already filtered; `search` is only used to
/// highlight the matched part of the item name.
#[component]
pub fn InventoryTable(
    #[prop(into)] rows: Signal<Vec<InventoryItem>>,
    #[prop(into)] search: Signal<String>,
    #[prop(into)] is_loaded: Signal<bool>,
) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell><strong>"Item"</strong></TableHeaderCell>
                    <TableHeaderCell><strong>"Category"</strong></TableHeaderCell>
                    <TableHeaderCell><strong>"Stock"</strong></TableHeaderCell>
                    <TableHeaderCell><strong>"Status"</strong></TableHeaderCell>
                    <TableHeaderCell><strong>"Deadline"</strong></TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    if !is_loaded.get() {
                        return placeholder_row("Loading...");
                    }
                    let items = rows.get();
                    if items.is_empty() {
                        return placeholder_row("No items found");
                    }
                    let filter = search.get();
                    items.into_iter().map(|item| {
                        // Ячейки thaw - move-замыкания, поэтому значения готовим заранее
                        let name = highlight_matches(&item.item, &filter);
                        let [category, stock, status, deadline] = row_cells(&item);
                        view! {
                            <TableRow>
                                <TableCell>{name}</TableCell>
                                <TableCell>{category}</TableCell>
                                <TableCell>{stock}</TableCell>
                                <TableCell>{status}</TableCell>
                                <TableCell>{deadline}</TableCell>
                            </TableRow>
                        }
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
}

/// Category, stock, status and deadline cell texts
fn row_cells(item: &InventoryItem) -> [String; 4] {
    [
        item.category.clone(),
        item.stock_display(),
        item.status_display().to_string(),
        item.deadline_display().to_string(),
    ]
}

fn placeholder_row(text: &'static str) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=COLUMNS.to_string() attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                {text}
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: Option<&str>, deadline: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: 1,
            item: "Bolt".to_string(),
            category: "Hardware".to_string(),
            stock: 120.0,
            unit: "pcs".to_string(),
            status: status.map(str::to_string),
            deadline: deadline.map(str::to_string),
        }
    }

    #[test]
    fn test_row_cells_filled() {
        let cells = row_cells(&item(Some("Completed"), Some("2024-07-01")));
        assert_eq!(cells, ["Hardware", "120 pcs", "Completed", "2024-07-01"]);
    }

    #[test]
    fn test_row_cells_placeholders() {
        assert_eq!(row_cells(&item(None, None))[2..], ["N/A", "N/A"]);
        assert_eq!(row_cells(&item(Some(""), Some("")))[2..], ["N/A", "N/A"]);
    }
}
