//! Precompiled patterns shared by the pattern-based rules
//!
//! Patterns used by built-in rules are compiled once per process and reused
//! across every validator instance, so repeated validation passes never pay
//! the compilation cost again.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

/// Anchored email address pattern
///
/// Accepts a dotted-atom local part (alphanumerics plus the special
/// characters permitted in unquoted local parts), an `@` separator, and a
/// domain of dot-separated labels where each label is 1-63 alphanumeric or
/// hyphen characters and starts and ends with an alphanumeric.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled form of [`EMAIL_PATTERN`], built on first use
pub fn email_pattern() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}
