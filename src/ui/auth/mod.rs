//! Authentication UI module
//!
//! This module provides the localStorage authentication flag, the auth
//! context, and the login and signup forms.

mod context;
mod login_form;
mod signup_form;
mod storage;
mod validation;

pub use context::{AuthContext, provide_auth_context, provide_auth_context_with, use_auth_context};
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
pub use storage::{LocalStorageAuth, STORAGE_KEY_AUTH_TOKEN, get_auth_token};
