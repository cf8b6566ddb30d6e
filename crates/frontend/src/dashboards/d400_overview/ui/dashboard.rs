use contracts::dashboards::d400_overview::{recent_activity, OverviewStats};
use contracts::domain::a001_client::mock::seed_clients;
use contracts::domain::a002_consultant::mock::seed_consultants;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::system::activity_log::mock::seed_activity_log;
use contracts::system::activity_log::ActivityLogEntry;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::consultants_widget::ConsultantsWidget;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::ui_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::activity_log::ui::list::severity_color;

/// Admin landing page. Data is local; the loading delay runs once on mount.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let config = ui_config();
    let clients = seed_clients();
    let consultants = seed_consultants();
    let logs = seed_activity_log();

    let stats = OverviewStats::compute(&clients, &consultants, &logs);
    let recent = recent_activity(&logs, config.recent_activity_limit);

    let loading = RwSignal::new(true);
    let delay_ms = config.overview_load_delay_ms;
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            loading.set(false);
            log::debug!("overview loaded after {} ms", delay_ms);
        });
    });

    let consultant_search = RwSignal::new(String::new());

    // None while loading renders the card placeholder
    let when_loaded = move |value: f64| Signal::derive(move || (!loading.get()).then_some(value));

    let average_score = stats.average_security_score;
    let score_value = Signal::derive(move || if loading.get() { None } else { average_score });
    let score_subtitle = match average_score {
        Some(_) => "assessed clients only".to_string(),
        None => "no assessments yet".to_string(),
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                    <span class="page__subtitle">{config.organization.clone()}</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total clients"
                        icon_name="briefcase"
                        value=when_loaded(stats.total_clients as f64)
                        format=ValueFormat::Integer
                        status=IndicatorStatus::Neutral
                    />
                    <StatCard
                        label="Active clients"
                        icon_name="check-circle"
                        value=when_loaded(stats.active_clients as f64)
                        format=ValueFormat::Integer
                        status=IndicatorStatus::Good
                    />
                    <StatCard
                        label="Average security score"
                        icon_name="shield"
                        value=score_value
                        format=ValueFormat::Score
                        status=IndicatorStatus::for_score(average_score)
                        subtitle=Some(score_subtitle)
                    />
                    <StatCard
                        label="Pending reviews"
                        icon_name="clipboard"
                        value=when_loaded(stats.pending_reviews as f64)
                        format=ValueFormat::Integer
                        status=IndicatorStatus::for_problem_count(stats.pending_reviews, 3)
                    />
                    <StatCard
                        label="Active consultants"
                        icon_name="users"
                        value=when_loaded(stats.active_consultants as f64)
                        format=ValueFormat::Integer
                        status=IndicatorStatus::Neutral
                    />
                    <StatCard
                        label="Warnings / errors"
                        icon_name="alert-triangle"
                        value=when_loaded(stats.problem_count() as f64)
                        format=ValueFormat::Integer
                        status=IndicatorStatus::for_problem_count(stats.errors, 1)
                        subtitle=Some(format!("{} warnings, {} errors", stats.warnings, stats.errors))
                    />
                </div>

                <div class="dashboard-columns">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Consultants"</h2>
                            <SearchInput
                                value=consultant_search
                                on_change=Callback::new(move |q: String| consultant_search.set(q))
                                placeholder="Name, role or affiliation..."
                            />
                        </div>
                        <ConsultantsWidget records=consultants loading=loading search=consultant_search />
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Recent activity"</h2>
                        </div>
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <div class="card__loading">"Loading..."</div> }
                        >
                            <RecentActivity entries=recent.clone() />
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentActivity(entries: Vec<ActivityLogEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <div class="card__empty">"No activity recorded"</div> }.into_any();
    }

    view! {
        <ul class="activity-feed">
            {entries.into_iter().map(|entry| view! {
                <li class="activity-feed__item">
                    <Badge appearance=BadgeAppearance::Tint color=severity_color(entry.severity)>
                        {entry.severity.label()}
                    </Badge>
                    <div class="activity-feed__body">
                        <div class="activity-feed__action">{entry.action}</div>
                        <div class="activity-feed__meta">
                            {format!("{} · {}", entry.user, format_datetime(entry.timestamp))}
                        </div>
                    </div>
                </li>
            }).collect_view()}
        </ul>
    }
    .into_any()
}
