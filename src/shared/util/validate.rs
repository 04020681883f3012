//! Input checks applied before anything reaches a store

use crate::shared::types::error::{KanbanError, KanbanResult};

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub const MAX_ACCOUNT_NAME_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_BOARD_NAME_LENGTH: usize = 100;
pub const MAX_BOARD_INFO_LENGTH: usize = 1000;
pub const MAX_CARD_TITLE_LENGTH: usize = 200;
pub const MAX_CARD_TEXT_LENGTH: usize = 600;
pub const MAX_IMAGE_URL_LENGTH: usize = 300;

pub const MIN_PROGRESS: i32 = 0;
pub const MAX_PROGRESS: i32 = 100;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Trims the value and rejects it if empty or longer than `max` characters
pub fn required(field: &str, value: &str, max: usize) -> KanbanResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(KanbanError::validation(format!("{field} is required")));
    }
    bounded(field, value, max)
}

/// Like `required` but an empty value is allowed
pub fn bounded(field: &str, value: &str, max: usize) -> KanbanResult<String> {
    if value.chars().count() > max {
        return Err(KanbanError::validation(format!("{field} must be at most {max} characters")));
    }
    Ok(value.to_string())
}

/// Lowercased, trimmed email address
pub fn email(value: &str) -> KanbanResult<String> {
    let value = required("Email", value, MAX_EMAIL_LENGTH)?.to_lowercase();
    if !email_regex().is_match(&value) {
        return Err(KanbanError::validation("Email is not a valid address"));
    }
    Ok(value)
}

pub fn password(value: &str, min: usize, max: usize) -> KanbanResult<&str> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(KanbanError::validation(
            format!("Password must be {min} - {max} characters (inclusive) in length")));
    }
    Ok(value)
}

/// Out of range values are rejected here, never clamped
pub fn progress(value: i32) -> KanbanResult<i32> {
    if !(MIN_PROGRESS..=MAX_PROGRESS).contains(&value) {
        return Err(KanbanError::validation(
            format!("Use a number between {MIN_PROGRESS} and {MAX_PROGRESS}.")));
    }
    Ok(value)
}

pub fn image_url(value: &str) -> KanbanResult<String> {
    let value = required("Image URL", value, MAX_IMAGE_URL_LENGTH)?;
    match Url::parse(&value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(value),
        _ => Err(KanbanError::validation("Image URL must be an absolute http(s) URL"))
    }
}
