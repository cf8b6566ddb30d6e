use crate::layout::center::tabs::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_labels::DEFAULT_TAB;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Sidebar + tab strip + tab pages. Navigation is tab based; the active
/// tab is mirrored into `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created.
    tabs_store.init_router_integration(DEFAULT_TAB);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <div class="tab-content">
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| {
                                view! { <TabPage tab=tab tabs_store=tabs_store /> }
                            }
                        />
                    </div>
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
