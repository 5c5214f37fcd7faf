//! Errors raised while building a form

use thiserror::Error;

/// Configuration mistakes detected when a form is constructed.
///
/// Validation failures are never reported through this type; they live on the
/// fields as messages.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}
