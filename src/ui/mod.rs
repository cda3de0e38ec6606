pub mod api;
pub mod auth;
pub mod layout;
pub mod navigation;
pub mod pages;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use layout::{SiteFooter, SiteHeader};
pub use navigation::{NavigationGate, RoutedPage, ScrollManager};
