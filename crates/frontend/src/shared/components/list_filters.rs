//! Filter form and filter chips generated from a page's `ListViewConfig`.

use super::filter_panel::FilterTag;
use super::filter_select::FilterSelect;
use crate::shared::date_utils::{date_input_value, format_date, parse_date_input};
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::ListViewModel;
use contracts::shared::list_view::{DateRange, ListEvent, ListRecord, FILTER_ALL};
use leptos::prelude::*;
use thaw::*;

/// "error" -> "Error"; other option values are already display text.
fn option_display(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Search box, one select per categorical filter, an optional date range
/// and a reset button.
#[component]
pub fn ListFilters<T>(
    model: ListViewModel<T>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: ListRecord + Send + Sync + 'static,
{
    let (filters, date_filter) = model
        .state
        .with_untracked(|s| (s.config.categorical_filters.clone(), s.config.date_filter));

    let date_range = Signal::derive(move || model.state.with(|s| s.criteria.date_range));
    let set_start = move |value: String| {
        let range = date_range.get_untracked();
        model.dispatch(ListEvent::SetDateRange(DateRange::new(
            parse_date_input(&value),
            range.end,
        )));
    };
    let set_end = move |value: String| {
        let range = date_range.get_untracked();
        model.dispatch(ListEvent::SetDateRange(DateRange::new(
            range.start,
            parse_date_input(&value),
        )));
    };

    view! {
        <Flex gap=FlexGap::Medium align=FlexAlign::End style="flex-wrap: wrap;">
            <div class="form__group form__group--inline">
                <label class="form__label">"Search"</label>
                <SearchInput
                    value=model.query()
                    on_change=model.on_query_change()
                    placeholder=search_placeholder
                />
            </div>

            {filters.into_iter().map(|filter| {
                view! {
                    <FilterSelect
                        label=filter.label
                        options=filter.options
                        value=model.selection(filter.field)
                        on_change=model.on_filter_change(filter.field)
                        option_label=option_display
                    />
                }
            }).collect_view()}

            {date_filter.then(|| view! {
                <div class="form__group form__group--inline">
                    <label class="form__label">"From"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || date_input_value(date_range.get().start)
                        on:change=move |ev| set_start(event_target_value(&ev))
                    />
                </div>
                <div class="form__group form__group--inline">
                    <label class="form__label">"To"</label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || date_input_value(date_range.get().end)
                        on:change=move |ev| set_end(event_target_value(&ev))
                    />
                </div>
            })}

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| {
                    model.dispatch(ListEvent::ResetFilters);
                }
                disabled=Signal::derive(move || model.active_filters_count().get() == 0)
            >
                "Reset filters"
            </Button>
        </Flex>
    }
}

/// One removable chip per active predicate.
#[component]
pub fn ActiveFilterTags<T>(model: ListViewModel<T>) -> impl IntoView
where
    T: ListRecord + Send + Sync + 'static,
{
    let filters = model
        .state
        .with_untracked(|s| s.config.categorical_filters.clone());

    move || {
        let criteria = model.state.with(|s| s.criteria.clone());
        let mut tags: Vec<AnyView> = Vec::new();

        if !criteria.trimmed_query().is_empty() {
            tags.push(view! {
                <FilterTag
                    label=format!("Search: {}", criteria.trimmed_query())
                    on_remove=Callback::new(move |_| {
                        model.dispatch(ListEvent::SetQuery(String::new()));
                    })
                />
            }.into_any());
        }

        for filter in filters.iter() {
            let selected = criteria.selection(filter.field);
            if selected == FILTER_ALL {
                continue;
            }
            let field = filter.field;
            tags.push(view! {
                <FilterTag
                    label=format!("{}: {}", filter.label, option_display(selected))
                    on_remove=Callback::new(move |_| {
                        model.dispatch(ListEvent::SetFilter {
                            field: field.to_string(),
                            value: FILTER_ALL.to_string(),
                        });
                    })
                />
            }.into_any());
        }

        let range = criteria.date_range;
        if !range.is_unbounded() {
            let label = match (range.start, range.end) {
                (Some(start), Some(end)) => format!("{} to {}", format_date(start), format_date(end)),
                (Some(start), None) => format!("From {}", format_date(start)),
                (None, Some(end)) => format!("Until {}", format_date(end)),
                (None, None) => String::new(),
            };
            tags.push(view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_| {
                        model.dispatch(ListEvent::SetDateRange(DateRange::default()));
                    })
                />
            }.into_any());
        }

        tags.collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_display() {
        assert_eq!(option_display("error"), "Error");
        assert_eq!(option_display("Pending Review"), "Pending Review");
        assert_eq!(option_display(""), "");
    }
}
