//! Login dialog
//!
//! A modal sign-in form with client-side validation. The marketing site has
//! no auth backend; a valid submission simply closes the dialog, which is
//! where the hosted product would take over.

use leptos::prelude::*;

use crate::core::validation::{validate_email, validate_password};
use crate::ui::common::{BaseModal, FormField};

/// Sign-in dialog, opened from the header
#[component]
pub fn LoginModal(
    /// Whether the dialog is open
    is_open: Signal<bool>,
    /// Callback to close the dialog
    on_close: Callback<()>,
) -> impl IntoView {
    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email_field = move || match validate_email(&email.get_untracked()) {
        Ok(()) => {
            email_error.set(None);
            true
        }
        Err(err) => {
            email_error.set(Some(err.to_string()));
            false
        }
    };

    let validate_password_field = move || match validate_password(&password.get_untracked()) {
        Ok(()) => {
            password_error.set(None);
            true
        }
        Err(err) => {
            password_error.set(Some(err.to_string()));
            false
        }
    };

    let reset = move || {
        email.set(String::new());
        password.set(String::new());
        email_error.set(None);
        password_error.set(None);
    };

    let close = Callback::new(move |_: ()| {
        reset();
        on_close.run(());
    });

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Validate both fields so all errors show at once
        let email_valid = validate_email_field();
        let password_valid = validate_password_field();

        if !email_valid || !password_valid {
            return;
        }

        close.run(());
    };

    view! {
        <BaseModal
            title="Welcome Back".to_string()
            subtitle="Sign in to your Flowdeck workspace".to_string()
            is_open=is_open
            on_close=close
            max_width="max-w-md"
        >
            <form on:submit=on_submit class="space-y-6">
                <FormField
                    label="Email".to_string()
                    required=true
                    input_type="email"
                    placeholder="you@company.com".to_string()
                    autocomplete="email"
                    value=Signal::derive(move || email.get())
                    on_input=Callback::new(move |value| {
                        email.set(value);
                        if email_error.get_untracked().is_some() {
                            validate_email_field();
                        }
                    })
                    error=Signal::derive(move || email_error.get())
                />

                <FormField
                    label="Password".to_string()
                    required=true
                    input_type="password"
                    placeholder="Your password".to_string()
                    autocomplete="current-password"
                    value=Signal::derive(move || password.get())
                    on_input=Callback::new(move |value| {
                        password.set(value);
                        if password_error.get_untracked().is_some() {
                            validate_password_field();
                        }
                    })
                    error=Signal::derive(move || password_error.get())
                />

                <div class="flex items-center justify-between gap-2 divider-top pt-4">
                    <a
                        href="#"
                        class="text-sm text-theme-secondary hover:text-accent-primary transition-colors"
                    >
                        "Forgot password?"
                    </a>
                    <button type="submit" class="btn-primary">
                        "Sign In"
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}
