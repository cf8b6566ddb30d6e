use contracts::dashboards::d401_reports::{
    activity_by_category, activity_by_severity, activity_per_day, clients_by_business_type,
    clients_by_status, consultant_workload, score_distribution,
};
use contracts::domain::a001_client::mock::seed_clients;
use contracts::domain::a002_consultant::mock::seed_consultants;
use contracts::system::activity_log::mock::seed_activity_log;
use leptos::prelude::*;

use crate::shared::components::bar_chart::BarChart;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Read-only charts over the seed data.
#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let clients = seed_clients();
    let consultants = seed_consultants();
    let logs = seed_activity_log();

    let scores = score_distribution(&clients);
    let unassessed_note = format!("{} client(s) not assessed yet", scores.unassessed);

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reports & Analytics"</h1>
                </div>
            </div>

            <div class="page__content">
                <h2 class="section__title">"Clients"</h2>
                <div class="chart-grid">
                    <BarChart series=scores.series footnote=unassessed_note />
                    <BarChart series=clients_by_business_type(&clients) />
                    <BarChart series=clients_by_status(&clients) />
                </div>

                <h2 class="section__title">"Activity"</h2>
                <div class="chart-grid">
                    <BarChart series=activity_per_day(&logs) />
                    <BarChart series=activity_by_severity(&logs) />
                    <BarChart series=activity_by_category(&logs) />
                </div>

                <h2 class="section__title">"Consultants"</h2>
                <div class="chart-grid">
                    <BarChart series=consultant_workload(&consultants) />
                </div>
            </div>
        </PageFrame>
    }
}
