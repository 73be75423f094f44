//! Core validator type: construction, field access, and report queries
//!
//! This module contains the main Validator struct. Construction decodes the
//! raw payload and binds it into the caller's destination type; the rule
//! methods that inspect individual fields live in the `rules` module.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::report::ErrorReport;

/// Decoded top-level JSON object, mapping field names to their values
pub type FieldMap = Map<String, Value>;

/// Single-use validator over one decoded JSON object
///
/// A validator owns the decoded field map and the failure report for one
/// validation pass. Construct it from a raw payload, invoke rule methods
/// against named fields, then ask [`is_valid`](Validator::is_valid) or
/// serialize the report. Rule methods record failures and keep going; only
/// construction can fail.
#[derive(Debug)]
pub struct Validator {
    fields: FieldMap,
    report: ErrorReport,
}

impl Validator {
    /// Decode a raw JSON payload and bind it into a destination type
    ///
    /// Returns the validator over the decoded fields together with the
    /// bound value. Fails with [`Error::Decode`] when the payload is not a
    /// well-formed JSON object at the top level, and with [`Error::Bind`]
    /// when the decoded fields cannot populate `T`. Both failures abort the
    /// pass before any rule runs, so no report exists for them.
    pub fn from_slice<T>(input: &[u8]) -> Result<(Self, T)>
    where
        T: DeserializeOwned,
    {
        let fields: FieldMap = serde_json::from_slice(input).map_err(|source| {
            debug!("payload is not a JSON object: {}", source);
            Error::Decode {
                message: source.to_string(),
                source,
            }
        })?;

        let bound = serde_json::from_value(Value::Object(fields.clone())).map_err(|source| {
            debug!("decoded fields do not fit the destination type: {}", source);
            Error::Bind {
                message: source.to_string(),
                source,
            }
        })?;

        let validator = Self {
            fields,
            report: ErrorReport::new(),
        };
        Ok((validator, bound))
    }

    /// String-input convenience over [`from_slice`](Validator::from_slice)
    pub fn from_str<T>(input: &str) -> Result<(Self, T)>
    where
        T: DeserializeOwned,
    {
        Self::from_slice(input.as_bytes())
    }

    /// Build a validator directly over an already-decoded field map
    pub fn from_fields(fields: FieldMap) -> Self {
        Self {
            fields,
            report: ErrorReport::new(),
        }
    }

    /// Get the decoded value of a field, if present
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get the decoded field map
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Get the accumulated failure report
    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    /// Get mutable access to the report, for recording custom failures
    /// alongside the built-in rules
    pub fn report_mut(&mut self) -> &mut ErrorReport {
        &mut self.report
    }

    /// Consume the validator, keeping only its report
    pub fn into_report(self) -> ErrorReport {
        self.report
    }

    /// Check whether the pass has recorded no failures so far
    pub fn is_valid(&self) -> bool {
        self.report.is_empty()
    }

    /// Serialize the report as a JSON object of field name to message list
    ///
    /// A fully valid pass serializes as `{}`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.report.to_json()
    }

    pub(super) fn fields_and_report(&mut self) -> (&FieldMap, &mut ErrorReport) {
        (&self.fields, &mut self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_starts_clean() {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::String("kay".to_string()));

        let validator = Validator::from_fields(fields);
        assert!(validator.is_valid());
        assert_eq!(
            validator.field("name"),
            Some(&Value::String("kay".to_string()))
        );
        assert_eq!(validator.field("missing"), None);
    }

    #[test]
    fn test_to_json_is_empty_object_when_clean() {
        let validator = Validator::from_fields(FieldMap::new());
        assert_eq!(validator.to_json().unwrap(), b"{}");
    }
}
