//! Form validation
//!
//! Checks run before a request is sent. A failure comes back as
//! `ClientError::Validation` with the message the form should show.

use shared::client::{PasswordUpdate, ProfileUpdate};
use shared::models::{BlogInput, CategoryInput, ContactMessage, CouponInput, CouponKind, StoreInput};

use crate::{ClientError, ClientResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Minimum admin password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Entity names and titles
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Helpers ─────────────────────────────────────────────────────────

/// Non-blank and within `max_len`
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(ClientError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Loose shape check: `local@domain.tld`, no whitespace
pub fn validate_email(value: &str) -> ClientResult<()> {
    validate_required_text(value, "Email", MAX_EMAIL_LEN)?;
    let value = value.trim();
    let valid = !value.contains(char::is_whitespace)
        && value
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain
                        .split_once('.')
                        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            });
    if valid {
        Ok(())
    } else {
        Err(ClientError::Validation("Please enter a valid email".into()))
    }
}

// ── Forms ───────────────────────────────────────────────────────────

pub fn validate_contact(message: &ContactMessage) -> ClientResult<()> {
    validate_required_text(&message.name, "Name", MAX_NAME_LEN)?;
    validate_email(&message.email)?;
    validate_required_text(&message.subject, "Subject", MAX_NAME_LEN)?;
    if message.message.trim().is_empty() {
        return Err(ClientError::Validation("Message is required".into()));
    }
    Ok(())
}

pub fn validate_store(input: &StoreInput) -> ClientResult<()> {
    validate_required_text(&input.name, "Store name", MAX_NAME_LEN)?;
    if input.logo.trim().is_empty() {
        return Err(ClientError::Validation("Logo is required".into()));
    }
    Ok(())
}

/// A code coupon without a code is allowed through with a warning.
pub fn validate_coupon(input: &CouponInput) -> ClientResult<()> {
    validate_required_text(&input.store_name, "Store", MAX_NAME_LEN)?;
    validate_required_text(&input.title, "Title", MAX_NAME_LEN)?;
    if input.kind == CouponKind::Code && input.code.trim().is_empty() {
        tracing::warn!(title = %input.title, "Code coupon saved without a code");
    }
    Ok(())
}

pub fn validate_category(input: &CategoryInput) -> ClientResult<()> {
    validate_required_text(&input.name, "Category name", MAX_NAME_LEN)
}

pub fn validate_blog(input: &BlogInput) -> ClientResult<()> {
    validate_required_text(&input.title, "Title", MAX_NAME_LEN)?;
    if input.excerpt.trim().is_empty() {
        return Err(ClientError::Validation("Excerpt is required".into()));
    }
    if input.content.trim().is_empty() {
        return Err(ClientError::Validation("Content is required".into()));
    }
    Ok(())
}

pub fn validate_profile(update: &ProfileUpdate) -> ClientResult<()> {
    validate_required_text(&update.name, "Name", MAX_NAME_LEN)?;
    validate_email(&update.email)?;
    if update.current_password.is_empty() {
        return Err(ClientError::Validation(
            "Current password is required".into(),
        ));
    }
    Ok(())
}

/// `confirm` is the repeated new password from the form
pub fn validate_password_change(update: &PasswordUpdate, confirm: &str) -> ClientResult<()> {
    if update.current_password.is_empty() {
        return Err(ClientError::Validation(
            "Current password is required".into(),
        ));
    }
    if update.new_password != confirm {
        return Err(ClientError::Validation("New passwords don't match".into()));
    }
    if update.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
