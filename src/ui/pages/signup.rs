use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::DASHBOARD_PATH;
use crate::ui::auth::SignupForm;

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate(DASHBOARD_PATH, Default::default());
    };

    view! {
        <div class="flex items-center justify-center py-16 px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-6 border border-slate-200">
                <SignupForm on_success=Callback::new(on_success) />
                <p class="mt-6 text-center text-sm text-slate-600">
                    "Already have an account? "
                    <A href="/login" attr:class="text-teal-700 hover:text-teal-800 font-medium">
                        "Log in"
                    </A>
                </p>
            </div>
        </div>
    }
}
