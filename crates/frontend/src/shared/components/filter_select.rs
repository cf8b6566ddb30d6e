use contracts::shared::list_view::FILTER_ALL;
use leptos::prelude::*;

/// Native select for one categorical filter. The first option is always
/// the "all" sentinel.
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    options: Vec<&'static str>,
    /// Currently selected value, `FILTER_ALL` when unfiltered
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Display text for a raw option value
    #[prop(optional)]
    option_label: Option<fn(&str) -> String>,
) -> impl IntoView {
    let display = move |raw: &str| option_label.map(|f| f(raw)).unwrap_or_else(|| raw.to_string());

    view! {
        <div class="form__group form__group--inline">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value=FILTER_ALL selected=move || value.get() == FILTER_ALL>"All"</option>
                {options.into_iter().map(|option| {
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {display(option)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
