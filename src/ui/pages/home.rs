//! Landing page component
//!
//! Hero, feature overview and the "how it works" steps. The in-page links
//! use fragments so the scroll policy brings the section into view.

use leptos::prelude::*;
use leptos_router::components::A;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Image analysis",
        body: "Upload a chest X-ray and get the model's reading with a confidence score in seconds.",
    },
    Feature {
        title: "Low-confidence warnings",
        body: "Images that don't look like medical scans are flagged instead of being forced into a diagnosis.",
    },
    Feature {
        title: "Conversation history",
        body: "Every upload and question stays in your dashboard so you can follow up later.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Create an account", "Sign up with your email. It takes less than a minute."),
    ("Upload a scan", "Drop an X-ray, MRI or CT image into the dashboard."),
    ("Review the result", "Read the suggested finding and ask the assistant follow-up questions."),
];

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-b from-teal-50 to-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                    <h1 class="text-4xl sm:text-5xl font-bold text-slate-900 tracking-tight">
                        "An AI second opinion for your medical images"
                    </h1>
                    <p class="mt-6 text-lg text-slate-600 max-w-2xl mx-auto">
                        "MediScan reads chest X-rays with a trained model and explains what it found in plain language."
                    </p>
                    <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/signup"
                            attr:class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white font-medium rounded-lg transition-colors"
                        >
                            "Start for free"
                        </A>
                        <a
                            href="/#how-it-works"
                            class="px-6 py-3 border border-slate-300 text-slate-900 hover:bg-slate-50 font-medium rounded-lg transition-colors"
                        >
                            "How it works"
                        </a>
                    </div>
                </div>
            </section>

            // Features
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid gap-8 md:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="p-6 bg-white rounded-xl border border-slate-200 shadow-sm">
                                    <h3 class="text-lg font-semibold text-slate-900">{feature.title}</h3>
                                    <p class="mt-2 text-sm text-slate-600">{feature.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            // How it works
            <section id="how-it-works" class="bg-slate-50 py-16">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-slate-900 text-center">"How it works"</h2>
                    <ol class="mt-10 space-y-6">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, (title, body))| {
                                view! {
                                    <li class="flex gap-4">
                                        <span class="flex-shrink-0 w-8 h-8 rounded-full bg-teal-600 text-white flex items-center justify-center font-semibold">
                                            {index + 1}
                                        </span>
                                        <div>
                                            <h3 class="font-semibold text-slate-900">{*title}</h3>
                                            <p class="text-sm text-slate-600">{*body}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <p class="mt-10 text-center text-sm text-slate-500">
                        "Questions? Read the "
                        <A href="/faq" attr:class="text-teal-700 hover:underline">"FAQ"</A>
                        " or compare "
                        <A href="/pricing" attr:class="text-teal-700 hover:underline">"plans"</A>
                        "."
                    </p>
                </div>
            </section>
        </div>
    }
}
