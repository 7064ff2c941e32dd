//! Theme context module for managing the dark/light preference
//!
//! Provides:
//! - ThemeMode enum (Light, Dark)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence under the `color-theme` key

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const STORAGE_KEY_THEME: &str = "color-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current effective theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Whether the current theme is dark
    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }

    /// Flip between light and dark, persisting the explicit choice
    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().opposite());
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.persist_theme(mode);
        self.apply_theme_class();
    }

    /// Persist theme to localStorage
    fn persist_theme(&self, mode: ThemeMode) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY_THEME, mode.as_str());
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = mode;
        }
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.mode.get_untracked() == ThemeMode::Dark {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

/// Load the explicitly chosen theme from localStorage, if any
fn load_persisted_theme() -> Option<ThemeMode> {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY_THEME) {
                    return Some(ThemeMode::from_str(&value));
                }
            }
        }
    }
    None
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application.
///
/// The persisted preference wins; otherwise the system preference is used,
/// and the mode keeps following system changes until the user toggles.
pub fn provide_theme_context() -> ThemeContext {
    let initial_mode = load_persisted_theme().unwrap_or_else(|| {
        if detect_system_prefers_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    });

    let mode = RwSignal::new(initial_mode);
    let ctx = ThemeContext { mode };

    // Follow system theme changes while no explicit choice is stored
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            if load_persisted_theme().is_some() {
                                return;
                            }
                            mode.set(if e.matches() {
                                ThemeMode::Dark
                            } else {
                                ThemeMode::Light
                            });
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    // Apply theme class initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        let ctx_clone = ctx;
        Effect::new(move |_| {
            // Subscribe to mode changes
            let _ = ctx_clone.mode.get();
            ctx_clone.apply_theme_class();
        });
    }

    // Provide context
    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!(ThemeMode::from_str(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(
            ThemeMode::from_str(ThemeMode::Light.as_str()),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        assert_eq!(ThemeMode::from_str("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_str(""), ThemeMode::Light);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
    }
}
