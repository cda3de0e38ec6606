//! Application pages module
//!
//! One component per entry of the route table, plus the not-found page.
//! [`page_view`] maps a route's [`ViewId`] to its component.

mod about;
mod dashboard;
mod faq;
mod home;
mod login;
mod not_found;
mod pricing;
mod signup;
mod terms;

use leptos::prelude::*;

use crate::core::ViewId;

pub use about::AboutPage;
pub use dashboard::DashboardPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use signup::SignupPage;
pub use terms::TermsPage;

/// Render the page a route points at
pub fn page_view(view: ViewId) -> AnyView {
    match view {
        ViewId::Home => view! { <HomePage /> }.into_any(),
        ViewId::Login => view! { <LoginPage /> }.into_any(),
        ViewId::Signup => view! { <SignupPage /> }.into_any(),
        ViewId::Dashboard => view! { <DashboardPage /> }.into_any(),
        ViewId::Pricing => view! { <PricingPage /> }.into_any(),
        ViewId::About => view! { <AboutPage /> }.into_any(),
        ViewId::Faq => view! { <FaqPage /> }.into_any(),
        ViewId::Terms => view! { <TermsPage /> }.into_any(),
    }
}
