//! Tab content registry: tab.key → View. All tab keys live here.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_reports::ui::ReportsDashboard;
use crate::dashboards::d402_client_portal::ui::ClientPortalDashboard;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_consultant::ui::list::ConsultantList;
use crate::system::activity_log::ui::list::ActivityLogList;
use crate::system::security_settings::ui::SecuritySettingsPage;
use crate::system::users::ui::list::UsersList;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "d401_reports" => view! { <ReportsDashboard /> }.into_any(),
        "d402_client_portal" => view! { <ClientPortalDashboard /> }.into_any(),

        // Records
        "a001_client" => view! { <ClientList /> }.into_any(),
        "a002_consultant" => view! { <ConsultantList /> }.into_any(),

        // System
        "sys_users" => view! { <UsersList /> }.into_any(),
        "sys_activity_log" => view! { <ActivityLogList /> }.into_any(),
        "sys_security_settings" => view! { <SecuritySettingsPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Unknown page"</div> }.into_any()
        }
    }
}
