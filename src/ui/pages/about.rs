use leptos::prelude::*;
use leptos_router::components::A;

/// About page component
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-8">
            <h1 class="text-4xl font-bold text-slate-900">"About MediScan"</h1>

            <p class="text-lg text-slate-600">
                "MediScan started as a research project on automated reading of chest X-rays. \
                 The model behind it is a convolutional network trained on labelled scans, \
                 and it decides between its known findings or tells you when it is unsure."
            </p>

            <section id="model">
                <h2 class="text-2xl font-semibold text-slate-900">"The model"</h2>
                <p class="mt-3 text-slate-600">
                    "Each upload is resized and normalised before the model scores it. \
                     Results below 50% confidence are reported as uncertain, which usually \
                     means the image is not a medical scan or is too low quality."
                </p>
            </section>

            <section id="safety">
                <h2 class="text-2xl font-semibold text-slate-900">"Safety"</h2>
                <p class="mt-3 text-slate-600">
                    "MediScan is a decision aid. It does not replace a radiologist and its \
                     output should always be reviewed by a qualified clinician."
                </p>
            </section>

            <A
                href="/signup"
                attr:class="inline-block px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white font-medium rounded-lg transition-colors"
            >
                "Try it now"
            </A>
        </div>
    }
}
