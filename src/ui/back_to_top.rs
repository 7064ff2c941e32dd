//! Back-to-top button
//!
//! Hidden until the page is scrolled past a threshold, then floats in the
//! corner and smooth-scrolls to the top on click.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Scroll offset in pixels after which the button becomes visible
#[cfg(not(feature = "ssr"))]
const VISIBILITY_THRESHOLD: f64 = 300.0;

#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;
        use leptos::web_sys;

        let handle = window_event_listener(scroll, move |_| {
            if let Some(window) = web_sys::window() {
                let offset = window.scroll_y().unwrap_or(0.0);
                visible.set(offset > VISIBILITY_THRESHOLD);
            }
        });

        on_cleanup(move || drop(handle));
    }

    let scroll_to_top = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys;

            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    };

    view! {
        <button
            class=move || {
                if visible.get() {
                    "fixed bottom-6 right-6 z-40 p-3 rounded-full bg-accent-primary text-white shadow-lg \
                     hover:bg-accent-primary-hover transition-all duration-300 opacity-100 translate-y-0"
                } else {
                    "fixed bottom-6 right-6 z-40 p-3 rounded-full bg-accent-primary text-white shadow-lg \
                     transition-all duration-300 opacity-0 invisible translate-y-20"
                }
            }
            on:click=scroll_to_top
            aria-label="Back to top"
        >
            <Icon name=icons::ARROW_UP class="w-5 h-5" />
        </button>
    }
}
