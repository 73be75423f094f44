//! Per-field accumulation of validation failures
//!
//! Rules record human-readable failure messages here instead of returning
//! errors, so one pass over a payload surfaces every problem at once. The
//! report serializes transparently as a JSON object mapping each failed
//! field to its ordered list of messages.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Accumulated validation failures, keyed by field name
///
/// Messages for a field keep the order in which rules recorded them, so the
/// first entry is always the first failure observed. A field appears as a
/// key only once it has at least one message; a clean field is absent, not
/// mapped to an empty list, and that holds for decoded reports too. Fields
/// iterate and serialize in name order, so a report's JSON form is
/// byte-for-byte reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    messages: BTreeMap<String, Vec<String>>,
}

impl ErrorReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Record a failure message against a field
    pub fn add<F, M>(&mut self, field: F, message: M)
    where
        F: Into<String>,
        M: Into<String>,
    {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Get the first message recorded for a field, if any
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Get every message recorded for a field, in recording order
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.messages.get(field).map(Vec::as_slice)
    }

    /// Check if any field has a recorded failure
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the number of fields with at least one failure
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate over the field names that have failures
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Project the report down to one message per field
    ///
    /// Returns each failed field paired with the first message recorded for
    /// it. Useful for form-style display where a field shows a single error.
    pub fn first_messages(&self) -> HashMap<&str, &str> {
        self.messages
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|message| (field.as_str(), message.as_str()))
            })
            .collect()
    }

    /// Fold another report into this one
    ///
    /// Messages from `other` are appended after any already recorded for the
    /// same field, preserving both recording orders.
    pub fn merge(&mut self, other: ErrorReport) {
        for (field, mut messages) in other.messages {
            self.messages.entry(field).or_default().append(&mut messages);
        }
    }

    /// Serialize the report as a JSON object of field name to message list
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|source| Error::Encode {
            message: source.to_string(),
            source,
        })
    }
}

impl Default for ErrorReport {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for ErrorReport {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A clean field is absent, never mapped to an empty list; wire
        // input stating one is normalized to uphold that here too
        let mut messages = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        messages.retain(|_, list| !list.is_empty());
        Ok(Self { messages })
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, messages) in &self.messages {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", name, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = ErrorReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.first_message("name"), None);
        assert_eq!(report.messages("name"), None);
    }

    #[test]
    fn test_add_preserves_recording_order() {
        let mut report = ErrorReport::new();
        report.add("name", "Cannot be blank.");
        report.add("name", "Too short (minimum is 2 characters).");

        assert_eq!(report.len(), 1);
        assert_eq!(report.first_message("name"), Some("Cannot be blank."));
        assert_eq!(
            report.messages("name"),
            Some(
                &[
                    "Cannot be blank.".to_string(),
                    "Too short (minimum is 2 characters).".to_string(),
                ][..]
            )
        );
    }

    #[test]
    fn test_first_messages_projection() {
        let mut report = ErrorReport::new();
        report.add("name", "Cannot be blank.");
        report.add("name", "Invalid value.");
        report.add("email", "Must contain a valid email address.");

        let first = report.first_messages();
        assert_eq!(first.len(), 2);
        assert_eq!(first.get("name"), Some(&"Cannot be blank."));
        assert_eq!(
            first.get("email"),
            Some(&"Must contain a valid email address.")
        );
    }

    #[test]
    fn test_merge_appends_per_field() {
        let mut left = ErrorReport::new();
        left.add("name", "Cannot be blank.");

        let mut right = ErrorReport::new();
        right.add("name", "Invalid value.");
        right.add("age", "Must contain a number.");

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert_eq!(
            left.messages("name"),
            Some(&["Cannot be blank.".to_string(), "Invalid value.".to_string()][..])
        );
        assert_eq!(left.first_message("age"), Some("Must contain a number."));
    }

    #[test]
    fn test_to_json_round_trips() {
        let mut report = ErrorReport::new();
        report.add("email", "Must contain a valid email address.");
        report.add("email", "Too long (maximum is 64 characters).");

        let bytes = report.to_json().unwrap();
        let decoded: ErrorReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut report = ErrorReport::new();
        report.add("age", "Must contain a number.");

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"age": ["Must contain a number."]})
        );
    }

    #[test]
    fn test_display_sorts_fields() {
        let mut report = ErrorReport::new();
        report.add("name", "Cannot be blank.");
        report.add("age", "Must contain a number.");

        assert_eq!(
            report.to_string(),
            "age: Must contain a number.; name: Cannot be blank."
        );
    }

    #[test]
    fn test_fields_iterates_failed_names_in_order() {
        let mut report = ErrorReport::new();
        report.add("name", "Cannot be blank.");
        report.add("email", "Must contain a valid email address.");
        report.add("email", "Too long (maximum is 64 characters).");

        let fields: Vec<&str> = report.fields().collect();
        assert_eq!(fields, vec!["email", "name"]);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(ErrorReport::default(), ErrorReport::new());
        assert!(ErrorReport::default().is_empty());
    }

    #[test]
    fn test_decoding_drops_empty_message_lists() {
        let decoded: ErrorReport =
            serde_json::from_str(r#"{"name": [], "age": ["Must contain a number."]}"#).unwrap();

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.first_message("name"), None);
        assert_eq!(decoded.messages("name"), None);
        assert!(!decoded.fields().any(|field| field == "name"));
        assert_eq!(decoded.first_message("age"), Some("Must contain a number."));

        let decoded: ErrorReport = serde_json::from_str(r#"{"name": []}"#).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_to_json_orders_fields_by_name() {
        let mut report = ErrorReport::new();
        report.add("name", "Cannot be blank.");
        report.add("age", "Must contain a number.");
        report.add("email", "Invalid value.");

        let json = String::from_utf8(report.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"age":["Must contain a number."],"email":["Invalid value."],"name":["Cannot be blank."]}"#
        );
    }
}
