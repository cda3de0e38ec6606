//! Navigation guard
//!
//! Every navigation is classified against an ordered list of rules. The first
//! rule whose predicate matches decides the outcome; when none match the
//! navigation proceeds. Authentication state is read from an injected
//! [`AuthStateProvider`] on every call, so a login or logout between two
//! navigations is honored on the second one.

use std::fmt;
use std::sync::Arc;

use super::route::{DASHBOARD_PATH, LOGIN_PATH, RouteTable, SIGNUP_PATH};

/// Read-only source of the current authentication state
pub trait AuthStateProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

impl<F> AuthStateProvider for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_authenticated(&self) -> bool {
        self()
    }
}

/// Authentication state as seen by the guard for a single navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn from_flag(authenticated: bool) -> Self {
        if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

/// A single navigation attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: String,
    pub target_hash: Option<String>,
    pub requires_auth: bool,
}

impl NavigationRequest {
    pub fn new(target_path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            target_path: target_path.into(),
            target_hash: None,
            requires_auth,
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.target_hash = Some(hash.into());
        self
    }

    fn targets_auth_form(&self) -> bool {
        self.target_path == LOGIN_PATH || self.target_path == SIGNUP_PATH
    }
}

/// Outcome of a guard evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation commit
    Proceed,
    /// Replace the navigation with one to the given path
    Redirect(&'static str),
    /// The path matched no route
    NotFound,
}

impl Decision {
    pub const fn redirect_to_login() -> Self {
        Decision::Redirect(LOGIN_PATH)
    }

    pub const fn redirect_to_dashboard() -> Self {
        Decision::Redirect(DASHBOARD_PATH)
    }

    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Decision::Redirect(path) => Some(*path),
            _ => None,
        }
    }
}

/// One entry of the guard's rule table
#[derive(Clone, Copy)]
pub struct GuardRule {
    pub name: &'static str,
    predicate: fn(&NavigationRequest, AuthState) -> bool,
    outcome: Decision,
}

impl GuardRule {
    pub fn new(
        name: &'static str,
        predicate: fn(&NavigationRequest, AuthState) -> bool,
        outcome: Decision,
    ) -> Self {
        Self {
            name,
            predicate,
            outcome,
        }
    }

    pub fn matches(&self, request: &NavigationRequest, state: AuthState) -> bool {
        (self.predicate)(request, state)
    }

    pub fn outcome(&self) -> Decision {
        self.outcome
    }

    /// Protected routes send anonymous visitors to the login page
    pub fn require_auth() -> Self {
        Self::new(
            "require-auth",
            anonymous_on_protected,
            Decision::redirect_to_login(),
        )
    }

    /// Signed-in users skip the login and signup forms
    pub fn skip_auth_forms() -> Self {
        Self::new(
            "skip-auth-forms",
            authenticated_on_auth_form,
            Decision::redirect_to_dashboard(),
        )
    }
}

fn anonymous_on_protected(request: &NavigationRequest, state: AuthState) -> bool {
    request.requires_auth && !state.is_authenticated()
}

fn authenticated_on_auth_form(request: &NavigationRequest, state: AuthState) -> bool {
    request.targets_auth_form() && state.is_authenticated()
}

impl fmt::Debug for GuardRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardRule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// Gate evaluated before every navigation commits
#[derive(Clone)]
pub struct NavigationGuard<'a> {
    table: &'a RouteTable,
    auth: Arc<dyn AuthStateProvider>,
    rules: Vec<GuardRule>,
}

impl<'a> NavigationGuard<'a> {
    /// Guard with the application rules: `require-auth`, then `skip-auth-forms`
    pub fn new(table: &'a RouteTable, auth: Arc<dyn AuthStateProvider>) -> Self {
        Self::with_rules(
            table,
            auth,
            vec![GuardRule::require_auth(), GuardRule::skip_auth_forms()],
        )
    }

    pub fn with_rules(
        table: &'a RouteTable,
        auth: Arc<dyn AuthStateProvider>,
        rules: Vec<GuardRule>,
    ) -> Self {
        Self { table, auth, rules }
    }

    pub fn rules(&self) -> &[GuardRule] {
        &self.rules
    }

    /// Current authentication state, read fresh from the provider
    pub fn auth_state(&self) -> AuthState {
        AuthState::from_flag(self.auth.is_authenticated())
    }

    /// Decide what happens to `request`
    pub fn resolve(&self, request: &NavigationRequest) -> Decision {
        self.resolve_as(request, self.auth_state())
    }

    /// Decide what happens to `request` for a given authentication state
    ///
    /// Pure: also used to evaluate states other than the current one.
    pub fn resolve_as(&self, request: &NavigationRequest, state: AuthState) -> Decision {
        self.matching_rule(request, state)
            .map_or(Decision::Proceed, GuardRule::outcome)
    }

    fn matching_rule(&self, request: &NavigationRequest, state: AuthState) -> Option<&GuardRule> {
        self.rules.iter().find(|rule| rule.matches(request, state))
    }

    /// Look `href` up in the route table and resolve it
    pub fn resolve_path(&self, href: &str) -> Decision {
        match self.table.request(href) {
            Some(request) => self.resolve(&request),
            None => Decision::NotFound,
        }
    }

    /// Decision for `href` when it does not depend on authentication
    ///
    /// Used before the flag can be read (server rendering, hydration): public
    /// pages and unknown paths can be rendered right away, while anything the
    /// flag could redirect returns `None`.
    pub fn resolve_path_auth_independent(&self, href: &str) -> Option<Decision> {
        let Some(request) = self.table.request(href) else {
            return Some(Decision::NotFound);
        };
        let anonymous = self.resolve_as(&request, AuthState::Unauthenticated);
        let signed_in = self.resolve_as(&request, AuthState::Authenticated);
        (anonymous == signed_in).then_some(anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn guard_with(authenticated: bool) -> NavigationGuard<'static> {
        NavigationGuard::new(
            RouteTable::application(),
            Arc::new(move || authenticated),
        )
    }

    struct ToggleAuth {
        flag: AtomicBool,
        reads: AtomicUsize,
    }

    impl AuthStateProvider for ToggleAuth {
        fn is_authenticated(&self) -> bool {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.flag.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_protected_routes_redirect_when_anonymous() {
        let guard = guard_with(false);
        for route in RouteTable::application().iter().filter(|r| r.requires_auth) {
            assert_eq!(
                guard.resolve_path(route.path),
                Decision::redirect_to_login(),
                "route {}",
                route.path
            );
        }
    }

    #[test]
    fn test_protected_routes_proceed_when_authenticated() {
        let guard = guard_with(true);
        for route in RouteTable::application()
            .iter()
            .filter(|r| r.requires_auth && r.path != LOGIN_PATH && r.path != SIGNUP_PATH)
        {
            assert_eq!(guard.resolve_path(route.path), Decision::Proceed);
        }
    }

    #[test]
    fn test_auth_forms_redirect_when_authenticated() {
        let guard = guard_with(true);
        assert_eq!(
            guard.resolve_path("/login"),
            Decision::redirect_to_dashboard()
        );
        assert_eq!(
            guard.resolve_path("/signup"),
            Decision::redirect_to_dashboard()
        );
    }

    #[test]
    fn test_login_proceeds_when_anonymous() {
        let guard = guard_with(false);
        assert_eq!(guard.resolve_path("/login"), Decision::Proceed);
        assert_eq!(guard.resolve_path("/signup"), Decision::Proceed);
    }

    #[test]
    fn test_public_routes_proceed_when_anonymous() {
        let guard = guard_with(false);
        for path in ["/", "/pricing", "/about", "/faq", "/terms"] {
            assert_eq!(guard.resolve_path(path), Decision::Proceed, "route {path}");
        }
    }

    #[test]
    fn test_public_routes_proceed_when_authenticated() {
        let guard = guard_with(true);
        for path in ["/", "/pricing", "/about", "/faq", "/terms"] {
            assert_eq!(guard.resolve_path(path), Decision::Proceed, "route {path}");
        }
    }

    #[test]
    fn test_require_auth_is_evaluated_first() {
        // A protected login page would hit both rules for an anonymous visitor.
        let request = NavigationRequest::new("/login", true);
        let guard = guard_with(false);
        assert_eq!(guard.resolve(&request), Decision::redirect_to_login());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let guard = guard_with(false);
        let request = NavigationRequest::new("/dashboard", true).with_hash("history");
        let first = guard.resolve(&request);
        let second = guard.resolve(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flag_is_read_on_every_call() {
        let auth = Arc::new(ToggleAuth {
            flag: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
        });
        let guard = NavigationGuard::new(RouteTable::application(), auth.clone());

        assert_eq!(
            guard.resolve_path("/dashboard"),
            Decision::redirect_to_login()
        );

        auth.flag.store(true, Ordering::SeqCst);
        assert_eq!(guard.resolve_path("/dashboard"), Decision::Proceed);
        assert_eq!(auth.reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(guard_with(false).resolve_path("/admin"), Decision::NotFound);
        assert_eq!(guard_with(true).resolve_path("/admin"), Decision::NotFound);
    }

    #[test]
    fn test_hash_and_query_do_not_change_decision() {
        let guard = guard_with(false);
        assert_eq!(
            guard.resolve_path("/dashboard?tab=chat#latest"),
            Decision::redirect_to_login()
        );

        let guard = guard_with(true);
        assert_eq!(
            guard.resolve_path("/login/?next=/pricing"),
            Decision::redirect_to_dashboard()
        );
    }

    #[test]
    fn test_custom_rules_stop_at_first_match() {
        let guard = NavigationGuard::with_rules(
            RouteTable::application(),
            Arc::new(|| false),
            vec![
                GuardRule::new(
                    "pricing-to-home",
                    |request, _| request.target_path == "/pricing",
                    Decision::Redirect("/"),
                ),
                GuardRule::new("everything", |_, _| true, Decision::redirect_to_login()),
            ],
        );
        assert_eq!(guard.resolve_path("/pricing"), Decision::Redirect("/"));
        assert_eq!(guard.resolve_path("/faq"), Decision::redirect_to_login());
    }

    #[test]
    fn test_no_rules_always_proceeds() {
        let guard =
            NavigationGuard::with_rules(RouteTable::application(), Arc::new(|| false), vec![]);
        assert_eq!(guard.resolve_path("/dashboard"), Decision::Proceed);
    }

    #[test]
    fn test_auth_independent_decisions() {
        let guard = guard_with(false);
        assert_eq!(
            guard.resolve_path_auth_independent("/pricing"),
            Some(Decision::Proceed)
        );
        assert_eq!(
            guard.resolve_path_auth_independent("/faq#billing"),
            Some(Decision::Proceed)
        );
        assert_eq!(
            guard.resolve_path_auth_independent("/nope"),
            Some(Decision::NotFound)
        );
        assert_eq!(guard.resolve_path_auth_independent("/dashboard"), None);
        assert_eq!(guard.resolve_path_auth_independent("/login"), None);
        assert_eq!(guard.resolve_path_auth_independent("/signup"), None);
    }

    #[test]
    fn test_resolve_as_ignores_provider() {
        let guard = guard_with(true);
        let request = NavigationRequest::new("/dashboard", true);
        assert_eq!(
            guard.resolve_as(&request, AuthState::Unauthenticated),
            Decision::redirect_to_login()
        );
        assert_eq!(guard.resolve(&request), Decision::Proceed);
    }

    #[test]
    fn test_matching_rule_names_the_first_match() {
        let guard = guard_with(false);
        let request = NavigationRequest::new("/login", true);

        let rule = guard.matching_rule(&request, AuthState::Authenticated).unwrap();
        assert_eq!(rule.name, "skip-auth-forms");
        assert_eq!(rule.outcome(), Decision::redirect_to_dashboard());

        let rule = guard.matching_rule(&request, AuthState::Unauthenticated).unwrap();
        assert_eq!(rule.name, "require-auth");

        let public = NavigationRequest::new("/faq", false);
        assert!(guard.matching_rule(&public, AuthState::Authenticated).is_none());
    }

    #[test]
    fn test_auth_independent_check_does_not_read_provider() {
        let auth = Arc::new(ToggleAuth {
            flag: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
        });
        let guard = NavigationGuard::new(RouteTable::application(), auth.clone());

        assert_eq!(guard.resolve_path_auth_independent("/dashboard"), None);
        assert_eq!(
            guard.resolve_path_auth_independent("/about"),
            Some(Decision::Proceed)
        );
        assert_eq!(auth.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<_> = guard_with(false).rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["require-auth", "skip-auth-forms"]);
    }

    #[test]
    fn test_decision_redirect_target() {
        assert_eq!(Decision::redirect_to_login().redirect_target(), Some("/login"));
        assert_eq!(
            Decision::redirect_to_dashboard().redirect_target(),
            Some("/dashboard")
        );
        assert_eq!(Decision::Proceed.redirect_target(), None);
        assert_eq!(Decision::NotFound.redirect_target(), None);
    }

    #[test]
    fn test_auth_state_from_flag() {
        assert_eq!(AuthState::from_flag(true), AuthState::Authenticated);
        assert_eq!(AuthState::from_flag(false), AuthState::Unauthenticated);
        assert!(guard_with(true).auth_state().is_authenticated());
    }
}
