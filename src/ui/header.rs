//! Fixed site header with desktop nav, mobile menu, and theme toggle

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, ThemeMode};

/// Header component with mobile menu support
#[component]
pub fn Header(
    /// Theme context for the toggle buttons
    theme: ThemeContext,
    /// Opens the sign-in dialog
    on_login: Callback<()>,
) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"Flowdeck"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <NavLink href="#features" label="Features" />
                            <NavLink href="#screens" label="Product" />
                            <NavLink href="#roles" label="Roles" />
                            <NavLink href="#faq" label="FAQ" />
                        </nav>
                        <button
                            class="px-4 py-2 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors shadow-md"
                            on:click=move |_| on_login.run(())
                        >
                            "Sign In"
                        </button>
                        <ThemeToggle theme=theme />
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            <MobileNavLink href="#features" label="Features" on_navigate=set_mobile_menu_open />
                            <MobileNavLink href="#screens" label="Product" on_navigate=set_mobile_menu_open />
                            <MobileNavLink href="#roles" label="Roles" on_navigate=set_mobile_menu_open />
                            <MobileNavLink href="#faq" label="FAQ" on_navigate=set_mobile_menu_open />
                            <button
                                class="block w-full text-center px-4 py-2 text-sm font-medium text-white bg-accent-primary rounded-lg"
                                on:click=move |_| {
                                    set_mobile_menu_open.set(false);
                                    on_login.run(());
                                }
                            >
                                "Sign In"
                            </button>
                            <ThemeToggle theme=theme />
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
pub fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.mode.get() == ThemeMode::Dark {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5" />
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5" />
                    }
                }
            }}
        </button>
    }
}

/// Desktop nav anchor
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
        >
            {label}
        </a>
    }
}

/// Mobile nav anchor, closes the menu on activation
#[component]
fn MobileNavLink(
    href: &'static str,
    label: &'static str,
    on_navigate: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
            on:click=move |_| on_navigate.set(false)
        >
            {label}
        </a>
    }
}

/// Logo component
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M4 6h16M4 12h10M4 18h7" />
            </svg>
        </div>
    }
}
