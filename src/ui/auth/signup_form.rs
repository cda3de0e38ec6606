//! Signup form component
//!
//! Collects name, email and a password. A successful signup signs the browser
//! in straight away.

use leptos::prelude::*;

use super::context::use_auth_context;
use super::validation::{validate_confirm, validate_email, validate_name, validate_new_password};

/// Store the outcome of a validator in an error signal, returning whether it passed
fn record(result: Result<(), &'static str>, error: RwSignal<Option<String>>) -> bool {
    match result {
        Ok(()) => {
            error.set(None);
            true
        }
        Err(message) => {
            error.set(Some(message.to_string()));
            false
        }
    }
}

/// A labelled input bound to a signal
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-slate-900 mb-1">{label}</label>
            <input
                type=input_type
                id=id
                name=id
                autocomplete=autocomplete
                placeholder=placeholder
                class="w-full px-3 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-600"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:blur=move |_| on_blur.run(())
            />
            {move || error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
        </div>
    }
}

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback when signup is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);

    // Form validation
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let terms_error = RwSignal::new(None::<String>);

    let check_name = move || record(validate_name(&name.get()), name_error);
    let check_email = move || record(validate_email(&email.get()), email_error);
    let check_password = move || record(validate_new_password(&password.get()), password_error);
    let check_confirm = move || {
        record(
            validate_confirm(&password.get(), &confirm_password.get()),
            confirm_error,
        )
    };
    let check_terms = move || {
        let result = if accepted_terms.get() {
            Ok(())
        } else {
            Err("Please accept the terms of service")
        };
        record(result, terms_error)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        // Run every check so all messages show at once
        let results = [
            check_name(),
            check_email(),
            check_password(),
            check_confirm(),
            check_terms(),
        ];
        if results.contains(&false) {
            return;
        }

        if auth.sign_in(&email.get()).is_ok() {
            if let Some(callback) = on_success.as_ref() {
                callback.run(());
            }
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-slate-900">"Create your account"</h2>
                <p class="mt-2 text-sm text-slate-600">
                    "Upload X-ray, MRI or CT images and get an AI-assisted first read"
                </p>
            </div>

            {move || {
                auth.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            <Field
                id="name"
                label="Full name"
                input_type="text"
                autocomplete="name"
                placeholder="Jane Doe"
                value=name
                error=name_error
                on_blur=move |_| { check_name(); }
            />
            <Field
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                error=email_error
                on_blur=move |_| { check_email(); }
            />
            <Field
                id="password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                placeholder="At least 8 characters"
                value=password
                error=password_error
                on_blur=move |_| { check_password(); }
            />
            <Field
                id="confirm-password"
                label="Confirm password"
                input_type="password"
                autocomplete="new-password"
                placeholder="Repeat your password"
                value=confirm_password
                error=confirm_error
                on_blur=move |_| { check_confirm(); }
            />

            <div>
                <label class="flex items-start gap-2 text-sm text-slate-600">
                    <input
                        type="checkbox"
                        class="mt-0.5"
                        prop:checked=move || accepted_terms.get()
                        on:change=move |ev| {
                            accepted_terms.set(event_target_checked(&ev));
                            terms_error.set(None);
                        }
                    />
                    <span>
                        "I agree to the "
                        <a href="/terms" class="text-teal-700 hover:underline">"terms of service"</a>
                    </span>
                </label>
                {move || terms_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e}</p> })}
            </div>

            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-teal-600 hover:bg-teal-700 text-white font-medium rounded-lg transition-colors"
            >
                "Create Account"
            </button>
        </form>
    }
}
