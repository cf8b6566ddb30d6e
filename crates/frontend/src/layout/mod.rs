pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use crate::shared::theme::use_theme;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |  Tab strip       |
/// |   (left)  |  Tab content     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let theme = use_theme().theme;
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout" data-theme=move || theme.get().as_str()>
            <TopHeader />

            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>

                <main data-zone="center" class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
