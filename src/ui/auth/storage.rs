//! Authentication flag in localStorage
//!
//! The flag is the presence of a non-empty `authToken` entry. The navigation
//! guard only reads it; the login, signup and logout flows write it.

use crate::core::AuthStateProvider;

/// Storage key of the authentication flag
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";

/// [`AuthStateProvider`] backed by `window.localStorage`
///
/// Every call reads storage again, so a token set or cleared in another tab
/// is picked up on the next navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageAuth;

impl AuthStateProvider for LocalStorageAuth {
    fn is_authenticated(&self) -> bool {
        get_auth_token().is_some()
    }
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<leptos::web_sys::Storage, String> {
    let window = leptos::web_sys::window().ok_or("No window available")?;
    window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or_else(|| "localStorage not available".to_string())
}

/// Get the auth token from localStorage
///
/// Returns None if localStorage is not available or the token is missing or empty
#[cfg(not(feature = "ssr"))]
pub fn get_auth_token() -> Option<String> {
    let storage = local_storage().ok()?;
    storage
        .get_item(STORAGE_KEY_AUTH_TOKEN)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Store the auth token in localStorage
#[cfg(not(feature = "ssr"))]
pub fn set_auth_token(token: &str) -> Result<(), String> {
    local_storage()?
        .set_item(STORAGE_KEY_AUTH_TOKEN, token)
        .map_err(|_| "Failed to set auth token".to_string())
}

/// Remove the auth token from localStorage
#[cfg(not(feature = "ssr"))]
pub fn clear_auth_token() -> Result<(), String> {
    local_storage()?
        .remove_item(STORAGE_KEY_AUTH_TOKEN)
        .map_err(|_| "Failed to remove auth token".to_string())
}

/// SSR stubs - there is no browser storage on the server
#[cfg(feature = "ssr")]
pub fn get_auth_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_auth_token(_token: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn clear_auth_token() -> Result<(), String> {
    Ok(())
}

/// Token written for a local sign-in
///
/// The backend has no session endpoint, so the token only marks the browser
/// as signed in and records who signed in.
pub fn session_token(email: &str) -> String {
    format!("local:{}", email.trim().to_lowercase())
}

/// Email recorded in a token written by [`session_token`]
pub fn token_email(token: &str) -> Option<&str> {
    token.strip_prefix("local:").filter(|email| !email.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_normalizes_email() {
        assert_eq!(session_token("  Jane@Example.com "), "local:jane@example.com");
    }

    #[test]
    fn test_token_email() {
        assert_eq!(token_email("local:jane@example.com"), Some("jane@example.com"));
        assert_eq!(token_email("local:"), None);
        assert_eq!(token_email("eyJhbGciOi"), None);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_side_storage_is_anonymous() {
        assert!(!LocalStorageAuth.is_authenticated());
        assert!(get_auth_token().is_none());
        assert!(set_auth_token("local:a@b.co").is_ok());
        assert!(clear_auth_token().is_ok());
    }
}
