use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::ui_config;
use crate::shared::theme::{Theme, ThemeProvider};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab navigation state for the whole app.
    provide_context(AppGlobalContext::new());

    let theme = Theme::from_name(&ui_config().theme);

    view! {
        <ThemeProvider theme=theme>
            <AppRoutes />
        </ThemeProvider>
    }
}
