use leptos::prelude::*;

#[component]
pub fn SettingToggle(
    label: &'static str,
    #[prop(into)] value: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="settings-toggle">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Numeric input clamped to `min..=max`. Unparseable input is ignored.
#[component]
pub fn SettingNumber(
    label: &'static str,
    min: u32,
    max: u32,
    #[prop(into)] value: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="number"
                class="form__input"
                min=min
                max=max
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).trim().parse::<u32>() {
                        on_change.run(parsed.clamp(min, max));
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn SettingSelect(
    label: &'static str,
    options: &'static [u32],
    unit: &'static str,
    #[prop(into)] value: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(parsed);
                    }
                }
            >
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option.to_string() selected=move || value.get() == option>
                            {format!("{option} {unit}")}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
