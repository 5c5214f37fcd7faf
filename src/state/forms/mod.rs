//! Form domain layer
//!
//! Declarative field rules, per-field validation state and a controller that
//! only forwards a submission once every field passes.

mod config;
mod controller;
mod error;
mod field;
mod rule;

pub use config::{FieldConfig, FormConfig, RuleConfig};
pub use controller::{FormValidationController, Payload, SubmissionResult};
pub use error::FormError;
pub use field::{FieldState, FieldStatus, FormField};
pub use rule::{ValidationRule, Validity, EMAIL_PATTERN};
