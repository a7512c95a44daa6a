use contracts::domain::a026_customer_order::Order;
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use thaw::*;

const COLUMNS: usize = 6;

/// One page of the orders table with an editable status column.
///
/// A status pick is reported as `(order_id, status)`; the table itself keeps
/// no copy of the orders.
#[component]
pub fn OrdersTable(
    #[prop(into)] rows: Signal<Vec<Order>>,
    #[prop(into)] is_loaded: Signal<bool>,
    on_status_change: Callback<(i64, String)>,
) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell attr:style="width: 100px;">"Order ID"</TableHeaderCell>
                    <TableHeaderCell>"Customer Name"</TableHeaderCell>
                    <TableHeaderCell>"Product"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 100px;">"Quantity"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 160px;">"Status"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 130px;">"Order Date"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    if !is_loaded.get() {
                        return placeholder_row("Loading...");
                    }
                    let orders = rows.get();
                    if orders.is_empty() {
                        return placeholder_row("No orders found");
                    }
                    orders.into_iter().map(|order| {
                        let order_id = order.id;
                        let current = order.status;
                        view! {
                            <TableRow>
                                <TableCell>{order.id}</TableCell>
                                <TableCell>{order.customer_name}</TableCell>
                                <TableCell>{order.product}</TableCell>
                                <TableCell>{order.quantity}</TableCell>
                                <TableCell>
                                    <select
                                        class="status-select"
                                        prop:value=current.as_str()
                                        on:change=move |ev| {
                                            on_status_change.run((order_id, event_target_value(&ev)));
                                        }
                                    >
                                        {OrderStatus::all().into_iter().map(|status| view! {
                                            <option value=status.as_str() selected={status == current}>
                                                {status.as_str()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </TableCell>
                                <TableCell>{order.order_date}</TableCell>
                            </TableRow>
                        }
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
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
