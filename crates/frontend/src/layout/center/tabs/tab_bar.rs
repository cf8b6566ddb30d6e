use super::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Strip of open tabs above the content area.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabComponent tab=tab /> }
            />
        </div>
    }
}
