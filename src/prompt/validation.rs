//! Per-question answer validators.
//!
//! Each validator takes the trimmed answer and returns a
//! [`ReadmeError::Validation`] describing what to fix.

use crate::errors::{ReadmeError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Local part: dot-separated atoms or a quoted string. Domain: a bracketed
// IPv4 literal or labels ending in an alphabetic TLD of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

pub fn validate_title(input: &str) -> Result<()> {
    require(input, "title", "A project title is required.")
}

pub fn validate_description(input: &str) -> Result<()> {
    require(input, "description", "A description for your project is required.")
}

/// Empty is allowed; anything else must look like an email address.
pub fn validate_email(input: &str) -> Result<()> {
    if input.is_empty() || is_valid_email(input) {
        Ok(())
    } else {
        Err(ReadmeError::validation("email", "Invalid email"))
    }
}

fn require(input: &str, field: &'static str, message: &str) -> Result<()> {
    if input.is_empty() {
        Err(ReadmeError::validation(field, message))
    } else {
        Ok(())
    }
}
