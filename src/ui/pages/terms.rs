use leptos::prelude::*;

const CLAUSES: [(&str, &str, &str); 4] = [
    (
        "use",
        "1. Use of the service",
        "MediScan provides automated analysis of medical images for informational purposes. \
         It is not a medical device and does not provide medical advice.",
    ),
    (
        "accounts",
        "2. Accounts",
        "You are responsible for the activity on your account and for keeping your sign-in \
         details private.",
    ),
    (
        "data",
        "3. Your data",
        "You keep ownership of the images you upload. We process them only to produce the \
         analysis you requested.",
    ),
    (
        "refunds",
        "4. Payments and refunds",
        "Paid plans are billed in advance. You may request a refund within 14 days of your \
         first payment.",
    ),
];

/// Terms of service page component
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-slate-900">"Terms of Service"</h1>
            <p class="mt-2 text-sm text-slate-500">"Last updated: January 2025"</p>

            {CLAUSES
                .iter()
                .map(|(id, title, body)| {
                    view! {
                        <section id=*id class="mt-10">
                            <h2 class="text-xl font-semibold text-slate-900">{*title}</h2>
                            <p class="mt-3 text-slate-600">{*body}</p>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
