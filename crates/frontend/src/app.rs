use crate::dashboards::SmartAutomationDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <SmartAutomationDashboard />
        </ConfigProvider>
    }
}
