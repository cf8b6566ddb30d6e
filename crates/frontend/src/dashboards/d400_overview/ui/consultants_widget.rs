use contracts::domain::a002_consultant::{widget_config, Consultant, ConsultantStatus};
use contracts::shared::list_view::ListEvent;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListViewModel;

/// Consultant card list. The search string comes from the parent; the
/// widget owns its own page window.
#[component]
pub fn ConsultantsWidget(
    records: Vec<Consultant>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] search: Signal<String>,
) -> impl IntoView {
    let model = ListViewModel::new("consultants_widget", widget_config(), records);
    let page = model.page();

    Effect::new(move |_| {
        let query = search.get();
        if model.query().get_untracked() != query {
            model.dispatch(ListEvent::SetQuery(query));
        }
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="card__loading">"Loading consultants..."</div> }
        >
            <ul class="consultant-cards">
                {move || {
                    let q = search.get_untracked();
                    let items = page.get().items;
                    if items.is_empty() {
                        return view! { <li class="card__empty">"No consultants found"</li> }.into_any();
                    }
                    items.into_iter().map(|c| {
                        let status_class = match c.status {
                            ConsultantStatus::Active => "dot dot--success",
                            ConsultantStatus::OnLeave => "dot dot--warning",
                            ConsultantStatus::Inactive => "dot dot--muted",
                        };
                        view! {
                            <li class="consultant-cards__item">
                                <span class=status_class title=c.status.as_str()></span>
                                <div>
                                    <div class="consultant-cards__name">{highlight_matches(&c.name, &q)}</div>
                                    <div class="consultant-cards__meta">
                                        {highlight_matches(c.role.as_str(), &q)}
                                        " · "
                                        {highlight_matches(&c.affiliation, &q)}
                                    </div>
                                </div>
                                <span class="consultant-cards__count">{format!("{} clients", c.client_count)}</span>
                            </li>
                        }
                    }).collect_view().into_any()
                }}
            </ul>
            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.page_index))
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                total_count=Signal::derive(move || page.with(|p| p.total_count))
                page_size=Signal::derive(move || page.with(|p| p.page_size))
                on_page_change=model.on_page_change()
                on_page_size_change=model.on_page_size_change()
                page_size_options=model.page_size_options()
            />
        </Show>
    }
}
