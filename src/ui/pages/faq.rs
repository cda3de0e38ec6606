//! FAQ page component
//!
//! Each section has an id so `/faq#<id>` links land on it.

use leptos::prelude::*;

struct Section {
    id: &'static str,
    title: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

const SECTIONS: [Section; 3] = [
    Section {
        id: "general",
        title: "General",
        entries: &[
            (
                "What images can I upload?",
                "Chest X-rays give the best results. MRI and CT slices are accepted but the model was trained on X-rays.",
            ),
            (
                "Is this a diagnosis?",
                "No. MediScan suggests a finding and a confidence level. Always confirm with a clinician.",
            ),
        ],
    },
    Section {
        id: "privacy",
        title: "Privacy",
        entries: &[
            (
                "Where are my images stored?",
                "Uploads are processed by the analysis service and kept only as long as needed to answer.",
            ),
            (
                "Who can see my results?",
                "Only you, while signed in on this browser.",
            ),
        ],
    },
    Section {
        id: "billing",
        title: "Billing",
        entries: &[
            (
                "Can I cancel at any time?",
                "Yes. Paid plans run until the end of the current period and are not renewed.",
            ),
            (
                "Do you offer refunds?",
                "Refunds are available within 14 days of the first payment. See the terms for details.",
            ),
        ],
    },
];

/// FAQ page component
#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-slate-900">"Frequently asked questions"</h1>

            <nav class="mt-6 flex gap-4 text-sm">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <a href=format!("/faq#{}", section.id) class="text-teal-700 hover:underline">
                                {section.title}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            {SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section id=section.id class="mt-12">
                            <h2 class="text-2xl font-semibold text-slate-900">{section.title}</h2>
                            <dl class="mt-6 space-y-6">
                                {section
                                    .entries
                                    .iter()
                                    .map(|(question, answer)| {
                                        view! {
                                            <div>
                                                <dt class="font-medium text-slate-900">{*question}</dt>
                                                <dd class="mt-1 text-slate-600">{*answer}</dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
