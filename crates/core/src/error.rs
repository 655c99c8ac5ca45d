//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input failures (missing fields,
/// malformed numbers). Store/infrastructure concerns belong elsewhere.
///
/// The `Display` text is the user-facing dialog message, so the desktop
/// layer can surface these without rewording.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required form fields were left empty.
    #[error("please fill all the fields")]
    MissingFields,

    /// A numeric field failed to parse. The payload names the field for
    /// logs and tests; the dialog message stays generic.
    #[error("please enter valid numeric values for stock, cost price, and selling price")]
    InvalidNumber(String),
}

impl DomainError {
    pub fn invalid_number(field: impl Into<String>) -> Self {
        Self::InvalidNumber(field.into())
    }
}
