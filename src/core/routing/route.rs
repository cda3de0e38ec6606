//! Route definitions and the application route table

use std::collections::HashSet;
use std::sync::LazyLock;

use super::guard::NavigationRequest;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Identifier of the page view a route renders.
///
/// The UI layer maps each variant to a component, so the routing core never
/// depends on the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Login,
    Signup,
    Dashboard,
    Pricing,
    About,
    Faq,
    Terms,
}

/// A single path-to-view mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDefinition {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub view: ViewId,
}

impl RouteDefinition {
    pub const fn public(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
            view,
        }
    }

    pub const fn protected(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
            view,
        }
    }
}

const APP_ROUTES: [RouteDefinition; 8] = [
    RouteDefinition::public(HOME_PATH, "Home", ViewId::Home),
    RouteDefinition::public(LOGIN_PATH, "Login", ViewId::Login),
    RouteDefinition::public(SIGNUP_PATH, "Signup", ViewId::Signup),
    RouteDefinition::protected(DASHBOARD_PATH, "Dashboard", ViewId::Dashboard),
    RouteDefinition::public("/pricing", "Pricing", ViewId::Pricing),
    RouteDefinition::public("/about", "About", ViewId::About),
    RouteDefinition::public("/faq", "FAQ", ViewId::Faq),
    RouteDefinition::public("/terms", "Terms", ViewId::Terms),
];

// APP_ROUTES is fixed at compile time; a failure here is a broken build,
// caught by the route table tests.
static APPLICATION: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new(APP_ROUTES.to_vec()).expect("application routes must be unique absolute paths")
});

/// Route table construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(&'static str),

    #[error("Route path must start with '/': {0}")]
    InvalidPath(&'static str),
}

/// Ordered, immutable set of route definitions
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate or relative paths
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path));
            }
            if !seen.insert(normalize_path(route.path)) {
                return Err(RouteTableError::DuplicatePath(route.path));
            }
        }
        Ok(Self { routes })
    }

    /// The table the application is served with
    pub fn application() -> &'static RouteTable {
        &APPLICATION
    }

    /// Find the route matching `href`, ignoring query, fragment and a trailing slash
    pub fn find(&self, href: &str) -> Option<&RouteDefinition> {
        let path = normalize_path(href);
        self.routes
            .iter()
            .find(|route| normalize_path(route.path) == path)
    }

    /// Build the navigation request for `href`, or `None` if no route matches
    pub fn request(&self, href: &str) -> Option<NavigationRequest> {
        let route = self.find(href)?;
        let (_, hash) = split_href(href);
        let request = NavigationRequest::new(normalize_path(href), route.requires_auth);
        Some(match hash {
            Some(hash) => request.with_hash(hash),
            None => request,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Split an href into its path (query stripped) and non-empty fragment
pub fn split_href(href: &str) -> (&str, Option<&str>) {
    let (before_hash, hash) = match href.split_once('#') {
        Some((before, hash)) if !hash.is_empty() => (before, Some(hash)),
        Some((before, _)) => (before, None),
        None => (href, None),
    };
    let path = before_hash
        .split_once('?')
        .map_or(before_hash, |(path, _)| path);
    (path, hash)
}

/// Path used for route matching: no query, no fragment, no trailing slash
pub fn normalize_path(href: &str) -> &str {
    let (path, _) = split_href(href);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
