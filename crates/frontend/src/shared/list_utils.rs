/// List page helpers: search input with debounce and match highlighting
use contracts::shared::list_view::search_needle;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Byte ranges of case-insensitive matches of `query` in `text`.
///
/// Returns nothing when lowercasing changes byte offsets (some non-ASCII
/// text), so highlighting never slices inside a character.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some(query) = search_needle(query) else {
        return Vec::new();
    };
    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&query) {
        let start = from + pos;
        let end = start + query.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Wraps every match of `query` in a highlight span.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Query currently applied to the list
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new query after the debounce delay
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let generation = StoredValue::new(0u32);

    // Reset from outside (e.g. "Reset filters")
    Effect::new(move |_| {
        let applied = value.get();
        if applied != input_value.get_untracked() {
            set_input_value.set(applied);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g = g.wrapping_add(1));
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Skip if a newer keystroke arrived or the page is gone
            if generation.try_get_value() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g = g.wrapping_add(1));
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || value.with(|q| search_needle(q).is_some())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Harbor Grill", "gri"), vec![(7, 10)]);
        assert_eq!(match_ranges("Harbor Grill", "grill "), vec![(7, 12)]);
        assert!(match_ranges("Harbor Grill", "   ").is_empty());
        assert_eq!(match_ranges("anna banana", "AN"), vec![(0, 2), (6, 8), (8, 10)]);
    }

    #[test]
    fn test_match_ranges_empty_query() {
        assert!(match_ranges("Harbor Grill", "  ").is_empty());
        assert!(match_ranges("Harbor Grill", "xyz").is_empty());
    }
}
