//! Field-level validation over one decoded JSON object
//!
//! This module implements the validation pass that runs over a decoded
//! payload before an application acts on it. Structural problems (a payload
//! that is not a JSON object, or fields that cannot bind into the caller's
//! type) fail construction; everything after that is content validation,
//! where rules accumulate per-field failures and never abort the pass.
//!
//! The validator is organized into focused modules:
//! - `core`: Main Validator struct, construction, and report queries
//! - `rules`: Field-level rule methods
//! - `patterns`: Precompiled patterns shared by the pattern-based rules
//! - `tests`: Test suite for the rule semantics
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod core;
pub mod patterns;
pub mod rules;

// Re-export public API
pub use self::core::{FieldMap, Validator};
pub use patterns::{email_pattern, EMAIL_PATTERN};
