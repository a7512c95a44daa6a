use crate::dashboards::d404_smart_automation::state::create_state;
use crate::dashboards::d404_smart_automation::tabs::DashboardTab;
use crate::domain::a025_inventory_item::api::fetch_inventory;
use crate::domain::a025_inventory_item::filter::StatusFilter;
use crate::domain::a025_inventory_item::ui::InventoryTable;
use crate::domain::a026_customer_order::api::fetch_orders;
use crate::domain::a026_customer_order::ui::OrdersTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::load_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Smart Automation Dashboard: inventory and orders on two tabs
#[component]
pub fn SmartAutomationDashboard() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load dashboard config: {}", e);
            return view! {
                <div class="dashboard-error">{format!("Configuration error: {}", e)}</div>
            }
            .into_any();
        }
    };

    let state = create_state(config.orders.page_size);

    // Обе коллекции грузятся независимо, порядок ответов не важен
    let inventory_url = config.data.inventory_url.clone();
    spawn_local(async move {
        let result = fetch_inventory(&inventory_url).await;
        state.try_update(|c| c.on_inventory_loaded(result));
    });
    let orders_url = config.data.orders_url.clone();
    spawn_local(async move {
        let result = fetch_orders(&orders_url).await;
        state.try_update(|c| c.on_orders_loaded(result));
    });

    // Sync TabList selection -> controller
    let selected_tab_value = RwSignal::new(DashboardTab::default().value().to_string());
    Effect::new(move |_| {
        let value = selected_tab_value.get();
        match DashboardTab::from_value(&value) {
            Some(tab) => state.update(|c| c.select_tab(tab)),
            None => log::warn!("Unknown dashboard tab: {:?}", value),
        }
    });

    let active_tab = Signal::derive(move || state.with(|c| c.view().active_tab));
    let search_text = Signal::derive(move || state.with(|c| c.view().inventory_search_text.clone()));
    let status_filter = Signal::derive(move || state.with(|c| c.view().inventory_status_filter));

    let inventory_rows = Signal::derive(move || state.with(|c| c.visible_inventory_rows()));
    let inventory_loaded = Signal::derive(move || state.with(|c| c.is_inventory_loaded()));
    let orders_rows = Signal::derive(move || state.with(|c| c.visible_orders_rows()));
    let orders_loaded = Signal::derive(move || state.with(|c| c.is_orders_loaded()));
    let orders_total = Signal::derive(move || state.with(|c| c.orders_total_count()));
    let page_index = Signal::derive(move || state.with(|c| c.view().orders_page_index));
    let page_size = Signal::derive(move || state.with(|c| c.view().orders_page_size));

    let on_search = Callback::new(move |text: String| state.update(|c| c.set_search_text(text)));
    let on_status_change = Callback::new(move |(order_id, status): (i64, String)| {
        state.update(|c| {
            c.update_order_status_str(order_id, &status);
        });
    });
    let on_page_change = Callback::new(move |page: usize| state.update(|c| c.set_orders_page(page)));
    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|c| {
            c.set_orders_page_size(size);
        });
    });

    let page_size_options = config.orders.page_size_options.clone();

    view! {
        <div id="d404_smart_automation--dashboard" class="d404-dashboard" style="max-width: 1200px; margin: 40px auto; padding: 20px;">
            <PageHeader title="Smart Automation Dashboard" />

            <TabList selected_value=selected_tab_value>
                {DashboardTab::all().into_iter().map(|tab| {
                    let tab_icon = match tab {
                        DashboardTab::Inventory => "inventory",
                        DashboardTab::Orders => "orders",
                    };
                    view! {
                        <Tab value=tab.value().to_string()>
                            {icon(tab_icon)}
                            " "
                            {tab.label()}
                        </Tab>
                    }
                }).collect_view()}
            </TabList>

            <h2 style="margin-top: 20px;">{move || active_tab.get().heading()}</h2>

            {move || match active_tab.get() {
                DashboardTab::Inventory => view! {
                    <div class="d404-inventory">
                        <SearchInput value=search_text on_change=on_search />
                        <label class="filter-label" style="display: block; margin-bottom: 20px;">
                            "Filter by Status "
                            <select
                                class="status-filter-select"
                                prop:value=move || status_filter.get().as_str()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|c| {
                                        c.set_status_filter(&value);
                                    });
                                }
                            >
                                {StatusFilter::options().into_iter().map(|filter| view! {
                                    <option value=filter.as_str() selected=move || status_filter.get() == filter>
                                        {filter.as_str()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>
                        <InventoryTable rows=inventory_rows search=search_text is_loaded=inventory_loaded />
                    </div>
                }.into_any(),
                DashboardTab::Orders => view! {
                    <div class="d404-orders">
                        <OrdersTable rows=orders_rows is_loaded=orders_loaded on_status_change=on_status_change />
                        <PaginationControls
                            current_page=page_index
                            total_count=orders_total
                            page_size=page_size
                            on_page_change=on_page_change
                            on_page_size_change=on_page_size_change
                            page_size_options=page_size_options.clone()
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}
