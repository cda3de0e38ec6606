//! Login form component

use leptos::prelude::*;

use super::context::use_auth_context;
use super::validation::validate_email;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let check_email = move || match validate_email(&email.get()) {
        Ok(()) => {
            email_error.set(None);
            true
        }
        Err(message) => {
            email_error.set(Some(message.to_string()));
            false
        }
    };

    let check_password = move || {
        if password.get().is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_valid = check_email();
        let password_valid = check_password();
        if !email_valid || !password_valid {
            return;
        }

        if auth.sign_in(&email.get()).is_ok() {
            if let Some(callback) = on_success.as_ref() {
                callback.run(());
            }
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-slate-900">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-slate-600">
                    "Sign in to review your scans and continue the conversation"
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

            <div>
                <label for="email" class="block text-sm font-medium text-slate-900 mb-1">
                    "Email"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class="w-full px-3 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-600"
                    class:border-red-500=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { check_email(); }
                />
                {move || {
                    email_error.get().map(|error| view! { <p class="mt-1 text-sm text-red-500">{error}</p> })
                }}
            </div>

            <div>
                <label for="password" class="block text-sm font-medium text-slate-900 mb-1">
                    "Password"
                </label>
                <div class="relative">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        class="w-full px-3 py-2 pr-16 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-teal-600"
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                        on:blur=move |_| { check_password(); }
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 text-xs font-medium text-slate-500 hover:text-slate-700"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                {move || {
                    password_error.get().map(|error| view! { <p class="mt-1 text-sm text-red-500">{error}</p> })
                }}
            </div>

            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-teal-600 hover:bg-teal-700 text-white font-medium rounded-lg transition-colors"
            >
                "Sign In"
            </button>
        </form>
    }
}
