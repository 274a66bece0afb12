//! fieldcheck - boundary-value tests for model validation rules
//!
//! fieldcheck proves that a model's field validation accepts exactly the
//! inputs it should and rejects exactly the inputs it should, with the exact
//! message expected. Each rule type comes with curated boundary inputs, so a
//! whole rule is covered by one call.
//!
//! # Quick Start
//!
//! ```ignore
//! use fieldcheck::{CheckOptions, CollectingRecorder, InputOverride, ValidationHarness};
//!
//! let mut model = BlogPost::new();
//! let mut recorder = CollectingRecorder::new();
//! {
//!     let mut harness = ValidationHarness::new(&mut model, &mut recorder);
//!     harness.test_boolean("is_active", "Is Active must be a boolean.", CheckOptions::default())?;
//!     harness.test_valid_foreign_key(
//!         "user_id",
//!         "User ID must exist.",
//!         CheckOptions::default().with_valid(InputOverride::of([1, 2, 3])),
//!     )?;
//! }
//! recorder.assert_clean();
//! ```
//!
//! # Architecture
//!
//! The model under test and the recorder are supplied by the caller through
//! the [`Model`] and [`TestRecorder`] traits. The harness holds no state
//! between calls beyond borrowing them.

pub use fieldcheck_core::{ErrorMap, ErrorMismatch, Record, Value};
pub use fieldcheck_harness::*;
