//! Pricing page component

use leptos::prelude::*;
use leptos_router::components::A;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        price: "$0",
        period: "forever",
        features: &["5 image analyses per month", "Chat assistant", "7-day history"],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: "$19",
        period: "per month",
        features: &[
            "Unlimited image analyses",
            "Priority model queue",
            "Unlimited history",
            "Export reports as PDF",
        ],
        highlighted: true,
    },
    Plan {
        name: "Clinic",
        price: "$99",
        period: "per month",
        features: &[
            "Everything in Pro",
            "Up to 20 staff accounts",
            "Shared patient folders",
            "Email support",
        ],
        highlighted: false,
    },
];

/// Pricing page component
#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-slate-900">"Simple, transparent pricing"</h1>
                <p class="mt-4 text-lg text-slate-600">"Start free and upgrade when you need more scans."</p>
            </div>

            <div class="mt-12 grid gap-8 md:grid-cols-3">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let card_class = if plan.highlighted {
                            "p-8 rounded-2xl border-2 border-teal-600 bg-white shadow-lg"
                        } else {
                            "p-8 rounded-2xl border border-slate-200 bg-white"
                        };
                        view! {
                            <div class=card_class>
                                <h2 class="text-xl font-semibold text-slate-900">{plan.name}</h2>
                                <p class="mt-4">
                                    <span class="text-4xl font-bold text-slate-900">{plan.price}</span>
                                    <span class="ml-1 text-sm text-slate-500">{plan.period}</span>
                                </p>
                                <ul class="mt-6 space-y-3 text-sm text-slate-600">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>"✓ " {*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <A
                                    href="/signup"
                                    attr:class="mt-8 block w-full py-2.5 text-center font-medium rounded-lg bg-teal-600 hover:bg-teal-700 text-white transition-colors"
                                >
                                    "Choose " {plan.name}
                                </A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="mt-12 text-center text-sm text-slate-500">
                "Billing questions are answered in the "
                <a href="/faq#billing" class="text-teal-700 hover:underline">"FAQ"</a>
                "."
            </p>
        </div>
    }
}
