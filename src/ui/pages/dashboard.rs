//! Dashboard page component
//!
//! Protected page holding the conversation with the diagnosis assistant.
//! Messages go to `/chat`, images to `/predict`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::assistant::{Author, ConversationEntry, Prediction};
use crate::ui::api::send_chat;
use crate::ui::auth::use_auth_context;

const GREETING: &str =
    "Hello! Upload a medical image or ask me a question about your results.";

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    let entries = RwSignal::new(vec![ConversationEntry::assistant(GREETING)]);
    let draft = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = draft.get().trim().to_string();
        if message.is_empty() || pending.get() {
            return;
        }

        entries.update(|list| list.push(ConversationEntry::user(message.clone())));
        draft.set(String::new());
        pending.set(true);

        spawn_local(async move {
            let reply = match send_chat(&message).await {
                Ok(text) => ConversationEntry::assistant(text),
                Err(e) => ConversationEntry::assistant(e.to_string()),
            };
            entries.update(|list| list.push(reply));
            pending.set(false);
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::web_sys;
            use wasm_bindgen::JsCast;

            use crate::ui::api::upload_image;

            if pending.get_untracked() {
                return;
            }
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow picking the same file twice in a row
            input.set_value("");

            entries.update(|list| {
                list.push(ConversationEntry::user(format!("Uploaded {}", file.name())))
            });
            pending.set(true);

            spawn_local(async move {
                let reply = match upload_image(&file).await {
                    Ok(response) => ConversationEntry::from_prediction(response),
                    Err(e) => ConversationEntry::assistant(e.to_string()),
                };
                entries.update(|list| list.push(reply));
                pending.set(false);
            });
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    let greeting = move || match auth.email.get() {
        Some(email) => format!("Welcome back, {}", email),
        None => "Welcome back".to_string(),
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-slate-900">"Dashboard"</h1>
                    <p class="text-sm text-slate-500">{greeting}</p>
                </div>
                <label class="cursor-pointer px-4 py-2 bg-teal-600 hover:bg-teal-700 text-white text-sm font-medium rounded-lg transition-colors">
                    "Upload image"
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        disabled=move || pending.get()
                        on:change=on_file
                    />
                </label>
            </div>

            <div class="mt-6 h-[28rem] overflow-y-auto rounded-xl border border-slate-200 bg-white p-4 space-y-4">
                <For
                    each=move || entries.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, entry)| view! { <MessageBubble entry=entry/> }
                />
                <Show when=move || pending.get()>
                    <p class="text-sm text-slate-400 italic">"Analysing..."</p>
                </Show>
            </div>

            <form class="mt-4 flex gap-2" on:submit=on_send>
                <input
                    type="text"
                    class="flex-1 px-4 py-2.5 bg-white border border-slate-300 rounded-lg text-slate-900 placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-teal-500"
                    placeholder="Ask about your results..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-5 py-2.5 bg-teal-600 hover:bg-teal-700 disabled:bg-teal-600/50 text-white font-medium rounded-lg transition-colors"
                    disabled=move || pending.get() || draft.get().trim().is_empty()
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[component]
fn MessageBubble(entry: ConversationEntry) -> impl IntoView {
    let (row_class, bubble_class) = match entry.author {
        Author::User => ("flex justify-end", "bg-teal-600 text-white"),
        Author::Assistant => ("flex justify-start", "bg-slate-100 text-slate-900"),
    };

    view! {
        <div class=row_class>
            <div class=format!("max-w-[80%] rounded-2xl px-4 py-2.5 text-sm {}", bubble_class)>
                <p class="whitespace-pre-wrap">{entry.text}</p>
                {entry.prediction.map(|prediction| view! { <PredictionSummary prediction=prediction/> })}
            </div>
        </div>
    }
}

#[component]
fn PredictionSummary(prediction: Prediction) -> impl IntoView {
    let badge_class = if prediction.is_uncertain() {
        "bg-amber-100 text-amber-800"
    } else {
        "bg-teal-100 text-teal-800"
    };
    let confidence = prediction.confidence_percent();

    view! {
        <div class="mt-2 flex flex-wrap items-center gap-2 text-xs">
            <span class=format!("px-2 py-0.5 rounded-full font-medium {}", badge_class)>
                {prediction.label}
            </span>
            <span class="text-slate-500">"Confidence " {confidence}</span>
            <span class="text-slate-400">{prediction.source}</span>
        </div>
    }
}
