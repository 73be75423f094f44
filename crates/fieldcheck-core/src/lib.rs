//! Fieldcheck Core - Field-level validation for decoded JSON objects
//!
//! This crate validates the shape and content of a JSON object before an
//! application acts on it. One construction step decodes the raw payload
//! and binds it into a caller-supplied type; after that, rule methods check
//! named fields and accumulate every failure into a per-field report
//! instead of stopping at the first problem.
//!
//! # Main Components
//!
//! - **Error Handling**: Structural decode and bind errors using `thiserror`
//! - **Error Report**: Per-field accumulation of human-readable failures
//! - **Validator**: Rule methods over the decoded field map
//!
//! # Example
//!
//! ```
//! use fieldcheck_core::Validator;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Signup {
//!     name: Option<String>,
//!     email: Option<String>,
//! }
//!
//! let body = br#"{"name": "", "email": "kay@example.com"}"#;
//! let (mut validator, signup) = Validator::from_slice::<Signup>(body)?;
//!
//! validator.required(&["name", "email"]);
//! validator.email("email");
//!
//! assert!(!validator.is_valid());
//! assert_eq!(
//!     validator.report().first_message("name"),
//!     Some("Cannot be blank.")
//! );
//! assert_eq!(signup.email.as_deref(), Some("kay@example.com"));
//! # Ok::<(), fieldcheck_core::Error>(())
//! ```

pub mod error;
pub mod report;
pub mod validator;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use report::ErrorReport;
pub use validator::{email_pattern, FieldMap, Validator, EMAIL_PATTERN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
