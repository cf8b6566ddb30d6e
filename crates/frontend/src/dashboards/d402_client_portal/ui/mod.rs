use contracts::dashboards::d402_client_portal::{ClientPortalSummary, QUICK_LINKS};
use contracts::domain::a001_client::mock::seed_clients;
use contracts::domain::a001_client::RiskLevel;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

fn risk_class(risk: Option<RiskLevel>) -> &'static str {
    match risk {
        None => "gauge gauge--unknown",
        Some(RiskLevel::Critical) => "gauge gauge--critical",
        Some(RiskLevel::High) => "gauge gauge--high",
        Some(RiskLevel::Moderate) => "gauge gauge--moderate",
        Some(RiskLevel::Low) => "gauge gauge--low",
    }
}

/// What a client sees: their score, risk band and next steps.
#[component]
pub fn ClientPortalDashboard() -> impl IntoView {
    let summaries: Vec<ClientPortalSummary> = seed_clients()
        .iter()
        .map(ClientPortalSummary::for_client)
        .collect();
    let options: Vec<(String, String)> = summaries
        .iter()
        .map(|s| (s.client_id.to_string(), s.client_name.clone()))
        .collect();
    let first_id = options.first().map(|(id, _)| id.clone()).unwrap_or_default();
    let summaries = StoredValue::new(summaries);

    let selected_id = RwSignal::new(first_id);
    let selected = Memo::new(move |_| {
        let id = selected_id.get();
        summaries.with_value(|all| all.iter().find(|s| s.client_id.to_string() == id).cloned())
    });

    view! {
        <PageFrame page_id="d402_client_portal--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Client Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <label class="form__label">"Client"</label>
                    <select
                        class="form__select"
                        prop:value=move || selected_id.get()
                        on:change=move |ev| selected_id.set(event_target_value(&ev))
                    >
                        {options.into_iter().map(|(id, name)| view! { <option value=id>{name}</option> }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="page__content">
                {move || match selected.get() {
                    None => view! { <div class="card__empty">"No clients"</div> }.into_any(),
                    Some(summary) => view! { <PortalSummary summary=summary /> }.into_any(),
                }}

                <h2 class="section__title">"Quick links"</h2>
                <div class="quick-links">
                    {QUICK_LINKS.iter().map(|link| view! {
                        <div class="quick-links__item card" title=link.path>
                            {icon(link.icon)}
                            <span>{link.label}</span>
                            <code class="quick-links__path">{link.path}</code>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn PortalSummary(summary: ClientPortalSummary) -> impl IntoView {
    let percent = summary.gauge_percent();
    let gauge_text = if summary.score.is_assessed() {
        format!("{percent}/100")
    } else {
        "Not assessed".to_string()
    };
    let risk_text = format!("Risk: {}", summary.risk_label());
    let status_text = summary.status.as_str();
    let consultants_text = format!("{} consultant(s)", summary.consultant_count);

    view! {
        <div class="portal-summary">
            <div class="card portal-summary__score">
                <h2 class="card__title">{summary.client_name.clone()}</h2>
                <div class=risk_class(summary.risk)>
                    <div class="gauge__track">
                        <div class="gauge__fill" style:width=format!("{percent}%")></div>
                    </div>
                    <div class="gauge__value">{gauge_text}</div>
                </div>
                <Flex gap=FlexGap::Small>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {risk_text}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {status_text}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                        {consultants_text}
                    </Badge>
                </Flex>
            </div>

            <div class="card portal-summary__recommendations">
                <h2 class="card__title">"Recommendations"</h2>
                <ol class="recommendations">
                    {summary.recommendations.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
                </ol>
            </div>
        </div>
    }
}
