//! Core types for fieldcheck
//!
//! This crate defines the data shared between a model under test and the
//! validation harness:
//! - Value: typed scalar input with strict, type-aware equality
//! - Record: field map loaded into a model
//! - ErrorMap: field to messages map a model reports after validation
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod error_map;
pub mod record;
pub mod value;

pub use error::{validate_field_name, Error, Result};
pub use error_map::{ErrorMap, ErrorMismatch};
pub use record::Record;
pub use value::Value;
