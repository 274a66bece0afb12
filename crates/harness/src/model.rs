//! The model under test
//!
//! The harness never knows a schema. It loads records into whatever the
//! caller adapts to `Model` and reads back the error map.

use fieldcheck_core::{ErrorMap, Record};

/// A record type whose validation rules are under test
///
/// # Contract
///
/// - `create` replaces any previously loaded record, including with an empty
///   or partial one.
/// - `validate` runs every configured rule against the loaded record and is
///   deterministic: the same record always yields the same map.
pub trait Model {
    /// Name used in failure diagnostics
    fn name(&self) -> &str;

    /// Load a candidate record
    fn create(&mut self, record: Record);

    /// Validate the loaded record; an empty map means valid
    fn validate(&mut self) -> ErrorMap;
}

/// Load `record` into `model` and return what validation reports
pub fn submit<M: Model + ?Sized>(model: &mut M, record: Record) -> ErrorMap {
    model.create(record);
    model.validate()
}
