//! Error types for fieldcheck core types
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the core data model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A field name was empty
    #[error("Field name must not be empty")]
    EmptyFieldName,

    /// A record was built from JSON that is not an object
    #[error("Record must be a JSON object, got: {0}")]
    NotAnObject(String),
}

/// Reject empty field names
pub fn validate_field_name(field: &str) -> Result<()> {
    if field.is_empty() {
        return Err(Error::EmptyFieldName);
    }
    Ok(())
}
