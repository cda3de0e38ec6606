//! Site header and footer shared by every page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;

const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-slate-600 hover:text-slate-900 rounded-lg transition-colors";

/// Header with the main navigation and the auth-dependent actions
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = use_auth_context();

    let on_logout = move |_| {
        auth.sign_out();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <header class="border-b border-slate-200 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-teal-600 rounded-lg flex items-center justify-center">
                            <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6v12M6 12h12" />
                            </svg>
                        </div>
                        <span class="text-xl font-bold text-slate-900">"MediScan"</span>
                    </A>

                    <nav class="hidden md:flex items-center gap-1">
                        <A href="/pricing" attr:class=NAV_LINK>"Pricing"</A>
                        <A href="/about" attr:class=NAV_LINK>"About"</A>
                        <A href="/faq" attr:class=NAV_LINK>"FAQ"</A>
                    </nav>

                    <div class="flex items-center gap-2">
                        <Show
                            when=move || auth.authenticated.get()
                            fallback=|| view! {
                                <A href="/login" attr:class=NAV_LINK>"Log in"</A>
                                <A
                                    href="/signup"
                                    attr:class="px-4 py-2 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 rounded-lg transition-colors"
                                >
                                    "Get started"
                                </A>
                            }
                        >
                            <A href="/dashboard" attr:class=NAV_LINK>"Dashboard"</A>
                            <button
                                class="px-4 py-2 text-sm font-medium text-slate-700 border border-slate-300 hover:bg-slate-50 rounded-lg transition-colors"
                                on:click=on_logout
                            >
                                "Log out"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-6 border-t border-slate-200 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-slate-500">"© 2025 MediScan. Not a substitute for professional medical advice."</p>
                <nav class="flex items-center gap-4 text-sm">
                    <A href="/about" attr:class="text-slate-500 hover:text-slate-700">"About"</A>
                    <A href="/faq" attr:class="text-slate-500 hover:text-slate-700">"FAQ"</A>
                    <A href="/terms" attr:class="text-slate-500 hover:text-slate-700">"Terms"</A>
                </nav>
            </div>
        </footer>
    }
}
