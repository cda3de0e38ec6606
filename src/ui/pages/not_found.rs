//! Not found page component
//!
//! A 404 error page displayed when no route matches the location.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Serve the page with a real 404 status
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-[70vh] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold text-slate-900 mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-slate-900 mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/dashboard"
                        attr:class="px-6 py-3 border border-slate-300 text-slate-900 hover:bg-slate-50 font-medium rounded-lg transition-colors"
                    >
                        "Open Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
