//! Client routing core
//!
//! Framework-independent pieces of navigation:
//! - Route table with access-control metadata
//! - Navigation guard built from an ordered rule table
//! - Scroll restoration policy
//!
//! The Leptos components in `ui::navigation` drive these on every location
//! change; nothing here touches the browser.

mod guard;
mod route;
mod scroll;

pub use guard::{
    AuthState, AuthStateProvider, Decision, GuardRule, NavigationGuard, NavigationRequest,
};
pub use route::{
    DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, RouteDefinition, RouteTable, RouteTableError,
    SIGNUP_PATH, ViewId, normalize_path, split_href,
};
pub use scroll::{ScrollHistory, ScrollPosition, ScrollTarget, resolve_scroll};
