use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::provide_auth_context;
use crate::ui::layout::{SiteFooter, SiteHeader};
use crate::ui::navigation::{NavigationGate, RoutedPage, ScrollManager};
use crate::ui::pages::NotFoundPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-slate-50 text-slate-900">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Auth flag shared by the header, the forms and the navigation guard
    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/mediscan.css"/>

        <Title text="MediScan - AI medical image analysis"/>

        <Router>
            <ScrollManager/>
            <div class="min-h-screen flex flex-col">
                <SiteHeader/>
                <main class="flex-1">
                    <NavigationGate>
                        // Every path of the route table renders through RoutedPage
                        <Routes fallback=NotFoundPage>
                            <Route path=path!("/") view=RoutedPage/>
                            <Route path=path!("/login") view=RoutedPage/>
                            <Route path=path!("/signup") view=RoutedPage/>
                            <Route path=path!("/dashboard") view=RoutedPage/>
                            <Route path=path!("/pricing") view=RoutedPage/>
                            <Route path=path!("/about") view=RoutedPage/>
                            <Route path=path!("/faq") view=RoutedPage/>
                            <Route path=path!("/terms") view=RoutedPage/>
                        </Routes>
                    </NavigationGate>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
