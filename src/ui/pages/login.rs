//! Login page component
//!
//! A standalone page for user login, redirects to dashboard on success.
//! Signed-in visitors never reach it: the navigation guard sends them to the
//! dashboard first.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::DASHBOARD_PATH;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate(DASHBOARD_PATH, Default::default());
    };

    view! {
        <div class="flex items-center justify-center py-16 px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-6 border border-slate-200">
                <LoginForm on_success=Callback::new(on_success) />
                <p class="mt-6 text-center text-sm text-slate-600">
                    "Don't have an account? "
                    <A href="/signup" attr:class="text-teal-700 hover:text-teal-800 font-medium">
                        "Sign up"
                    </A>
                </p>
            </div>
        </div>
    }
}
