//! Field-level validation rules
//!
//! This module contains the rule methods of the validator. Each rule
//! inspects named fields of the decoded object and records failures in the
//! validator's report; rules never abort the pass, so every failing field
//! surfaces in a single run. Fields in a state a rule cannot judge (absent
//! or wrongly typed where a string is needed) are recorded as failures
//! rather than skipped or panicked on.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use serde_json::Value;
use tracing::trace;

use super::core::{FieldMap, Validator};
use super::patterns::email_pattern;
use crate::report::ErrorReport;

const BLANK: &str = "Cannot be blank.";
const NOT_A_STRING: &str = "Must contain a string value.";
const NOT_A_NUMBER: &str = "Must contain a number.";
const INVALID_VALUE: &str = "Invalid value.";
const INVALID_EMAIL: &str = "Must contain a valid email address.";

impl Validator {
    /// Require each named field to be present and, for strings, non-blank
    ///
    /// A string value fails when it is empty or whitespace-only after
    /// trimming. Any other present value, including `null`, satisfies the
    /// rule by presence alone. Every absent name in `names` is recorded;
    /// one missing field never hides another.
    pub fn required(&mut self, names: &[&str]) {
        for &name in names {
            let blank = match self.field(name) {
                None => true,
                Some(Value::String(value)) => value.trim().is_empty(),
                Some(_) => false,
            };
            if blank {
                record(self.report_mut(), name, BLANK);
            }
        }
    }

    /// Require each named field to hold a string value
    ///
    /// Absent fields fail the rule.
    pub fn string(&mut self, names: &[&str]) {
        for &name in names {
            if !matches!(self.field(name), Some(Value::String(_))) {
                record(self.report_mut(), name, NOT_A_STRING);
            }
        }
    }

    /// Require each named field to hold a number, integer or float
    ///
    /// Absent fields fail the rule. Numeric content inside a string does
    /// not count; the decoded value itself must be a JSON number.
    pub fn number(&mut self, names: &[&str]) {
        for &name in names {
            if !matches!(self.field(name), Some(Value::Number(_))) {
                record(self.report_mut(), name, NOT_A_NUMBER);
            }
        }
    }

    /// Require the field's string value to be at most `limit` characters
    ///
    /// Length is counted in Unicode code points, not bytes. The empty
    /// string always passes, leaving emptiness to [`required`]. An absent
    /// or non-string field records the uniform `Invalid value.` failure.
    ///
    /// [`required`]: Validator::required
    pub fn max_chars(&mut self, name: &str, limit: usize) {
        let (fields, report) = self.fields_and_report();
        let value = match checked_str(fields, report, name) {
            Some(value) => value,
            None => return,
        };
        if value.is_empty() {
            return;
        }
        if value.chars().count() > limit {
            record(report, name, format!("Too long (maximum is {} characters).", limit));
        }
    }

    /// Require the field's string value to be at least `limit` characters
    ///
    /// Length is counted in Unicode code points, not bytes. The empty
    /// string always passes, leaving emptiness to [`required`]. An absent
    /// or non-string field records the uniform `Invalid value.` failure.
    ///
    /// [`required`]: Validator::required
    pub fn min_chars(&mut self, name: &str, limit: usize) {
        let (fields, report) = self.fields_and_report();
        let value = match checked_str(fields, report, name) {
            Some(value) => value,
            None => return,
        };
        if value.is_empty() {
            return;
        }
        if value.chars().count() < limit {
            record(report, name, format!("Too short (minimum is {} characters).", limit));
        }
    }

    /// Require the field's string value to match a caller-supplied pattern
    ///
    /// The empty string always passes. An absent or non-string field
    /// records the same `Invalid value.` failure a non-matching value does.
    pub fn match_pattern(&mut self, name: &str, pattern: &Regex) {
        let (fields, report) = self.fields_and_report();
        let value = match checked_str(fields, report, name) {
            Some(value) => value,
            None => return,
        };
        if value.is_empty() {
            return;
        }
        if !pattern.is_match(value) {
            record(report, name, INVALID_VALUE);
        }
    }

    /// Require the field's string value to be a well-formed email address
    ///
    /// Matching is anchored over the whole value using the library's
    /// precompiled [`EMAIL_PATTERN`](super::patterns::EMAIL_PATTERN). The
    /// empty string always passes. An absent or non-string field records
    /// the uniform `Invalid value.` failure; a present string that fails
    /// the pattern records the email-specific message.
    pub fn email(&mut self, name: &str) {
        let (fields, report) = self.fields_and_report();
        let value = match checked_str(fields, report, name) {
            Some(value) => value,
            None => return,
        };
        if value.is_empty() {
            return;
        }
        if !email_pattern().is_match(value) {
            record(report, name, INVALID_EMAIL);
        }
    }
}

/// Record a failure against a field, tracing every recorded message
fn record<M>(report: &mut ErrorReport, name: &str, message: M)
where
    M: Into<String>,
{
    let message = message.into();
    trace!("field '{}' failed validation: {}", name, message);
    report.add(name, message);
}

/// Fetch `name` as a string for the length and pattern rules, recording
/// the uniform `Invalid value.` failure when the field is absent or does
/// not hold a string
fn checked_str<'a>(fields: &'a FieldMap, report: &mut ErrorReport, name: &str) -> Option<&'a str> {
    match fields.get(name) {
        Some(Value::String(value)) => Some(value.as_str()),
        _ => {
            trace!("field '{}' is absent or not a string", name);
            record(report, name, INVALID_VALUE);
            None
        }
    }
}
