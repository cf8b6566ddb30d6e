//! Theme handling.
//!
//! The theme comes from `config.toml` and is provided read-only through
//! context; there is no runtime switcher.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the CSS file path for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light.css",
            Theme::Dark => "/static/themes/dark.css",
        }
    }

    /// Unknown names fall back to the default theme.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Apply theme by loading the theme CSS file.
fn apply_theme_css(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(head) = document.head() {
        if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
            existing.remove();
        }
        if let Ok(link) = document.create_element("link") {
            let _ = link.set_attribute("id", "theme-stylesheet");
            let _ = link.set_attribute("rel", "stylesheet");
            let _ = link.set_attribute("href", theme.css_path());
            let _ = head.append_child(&link);
        }
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
}

/// Provides the configured theme to children components.
#[component]
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    apply_theme_css(theme);
    provide_context(ThemeContext {
        theme: Signal::stored(theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("forest"), Theme::Light);
    }
}
