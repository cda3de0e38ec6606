//! Form field validation shared by the login and signup forms

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Please enter a valid email"),
    }
}

pub fn validate_name(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err("Name is required")
    } else if value.chars().count() < 2 {
        Err("Name must be at least 2 characters")
    } else if value.chars().count() > 60 {
        Err("Name must be less than 60 characters")
    } else {
        Ok(())
    }
}

/// Password rules for new accounts
pub fn validate_new_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Password is required")
    } else if value.len() < 8 {
        Err("Password must be at least 8 characters")
    } else if !value.chars().any(|c| c.is_alphabetic()) {
        Err("Password must contain at least one letter")
    } else if !value.chars().any(|c| c.is_numeric()) {
        Err("Password must contain at least one digit")
    } else {
        Ok(())
    }
}

pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        Err("Please confirm your password")
    } else if password != confirm {
        Err("Passwords do not match")
    } else {
        Ok(())
    }
}
