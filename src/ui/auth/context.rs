//! Auth context for the component tree
//!
//! Holds the injected [`AuthStateProvider`] the navigation guard reads from,
//! plus a reactive mirror of the flag for rendering (header buttons, greeting).
//! The mirror is refreshed after every navigation and every sign-in or
//! sign-out; the guard never relies on it.

use std::sync::Arc;

use leptos::prelude::*;

use super::storage::{
    LocalStorageAuth, clear_auth_token, get_auth_token, session_token, set_auth_token, token_email,
};
use crate::core::AuthStateProvider;

/// Auth context providing the authentication capability and its UI state
#[derive(Clone, Copy)]
pub struct AuthContext {
    provider: StoredValue<Arc<dyn AuthStateProvider>>,
    /// Whether the flag was present at the last refresh
    pub authenticated: RwSignal<bool>,
    /// Email of the signed-in user, when the token records one
    pub email: RwSignal<Option<String>>,
    /// False until the flag has been read in the browser
    pub ready: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// The capability handed to the navigation guard
    pub fn provider(&self) -> Arc<dyn AuthStateProvider> {
        self.provider.get_value()
    }

    /// Re-read the flag and update the UI mirror
    pub fn refresh(&self) {
        let authenticated = self.provider.with_value(|p| p.is_authenticated());
        let email = if authenticated {
            get_auth_token()
                .as_deref()
                .and_then(token_email)
                .map(str::to_string)
        } else {
            None
        };

        self.authenticated.set(authenticated);
        self.email.set(email);
        self.ready.set(true);
    }

    /// Mark the browser as signed in as `email`
    pub fn sign_in(&self, email: &str) -> Result<(), String> {
        if let Err(e) = set_auth_token(&session_token(email)) {
            leptos::logging::warn!("sign-in failed: {}", e);
            self.error.set(Some(e.clone()));
            return Err(e);
        }
        self.error.set(None);
        self.refresh();
        Ok(())
    }

    /// Remove the flag; the next navigation sees an anonymous visitor
    pub fn sign_out(&self) {
        if let Err(e) = clear_auth_token() {
            leptos::logging::warn!("sign-out failed: {}", e);
        }
        self.refresh();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Provide the localStorage-backed auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    provide_auth_context_with(Arc::new(LocalStorageAuth))
}

/// Provide an auth context reading from `provider`
pub fn provide_auth_context_with(provider: Arc<dyn AuthStateProvider>) -> AuthContext {
    // Start anonymous and not ready on both server and client to avoid hydration mismatch
    let ctx = AuthContext {
        provider: StoredValue::new(provider),
        authenticated: RwSignal::new(false),
        email: RwSignal::new(None),
        ready: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    // Read the flag once hydration is complete (client-side only)
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| ctx.refresh());

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
