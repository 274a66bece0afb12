//! Boundary-value harness for model validation rules
//!
//! This crate proves that a model's field validation accepts exactly the
//! inputs it should and rejects exactly the inputs it should, with the exact
//! message expected:
//! - RuleInputCatalog: canonical boundary inputs per rule
//! - reconcile / CandidateInputSet: keeps valid and invalid inputs disjoint
//! - ValidationHarness: per-field rule checks
//! - DataSetHarness: whole-record checks for cross-field rules
//! - fill_to_length: deterministic fixed-length text
//! - Model / TestRecorder: the collaborators a caller supplies
//! - HarnessConfig: `fieldcheck.toml` tuning
//!
//! # Example
//!
//! ```ignore
//! use fieldcheck_harness::{CheckOptions, CollectingRecorder, ValidationHarness};
//!
//! let mut recorder = CollectingRecorder::new();
//! {
//!     let mut harness = ValidationHarness::new(&mut blog_post, &mut recorder);
//!     harness.test_not_empty("title", "Title must not be empty.", 4, CheckOptions::default())?;
//!     harness.test_min_length("title", "Title must be at least 4 characters long.", 4, CheckOptions::default())?;
//! }
//! recorder.assert_clean();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fill;
pub mod harness;
pub mod inputs;
pub mod model;
pub mod reconcile;
pub mod recorder;
pub mod rule;

pub use catalog::{RuleInputCatalog, VALID_IPV4};
pub use config::{HarnessConfig, CONFIG_FILE_NAME, DEFAULT_DATETIME, DEFAULT_MISSING_FOREIGN_KEY};
pub use dataset::DataSetHarness;
pub use error::{HarnessError, HarnessResult};
pub use fill::{fill_to_length, FILL_CHARACTERS};
pub use harness::{input_diagnostic, CheckReport, FieldCheckOutcome, Side, ValidationHarness};
pub use inputs::{CheckOptions, InputOverride, InputSet};
pub use model::{submit, Model};
pub use reconcile::{reconcile, CandidateInputSet};
pub use recorder::{AssertionFailure, CollectingRecorder, TestRecorder};
pub use rule::{RuleKind, RuleSpec};
