use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel. The header always shows the pagination
/// controls and a badge with the number of active filters.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls shown in the header
    pagination_controls: AnyView,

    /// Active filter chips under the form fields
    #[prop(optional)]
    filter_tags: Option<AnyView>,

    /// Filter form fields
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls}
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {children()}
                    {filter_tags.map(|tags| view! {
                        <div class="filter-panel__tags">{tags}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Removable chip for one active filter.
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
