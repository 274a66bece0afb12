//! Canonical boundary inputs per rule
//!
//! For every rule kind the catalog knows a fixed list of inputs that must be
//! rejected and how to derive inputs that must be accepted. The lists are
//! deliberately small: each entry sits on or just past the edge of the rule.
//!
//! | Rule | Invalid | Default valid |
//! |------|---------|---------------|
//! | notempty | `''` | fill of `valid_length` |
//! | minlength | fill of `min - 1` | fill of `min` |
//! | maxlength | fill of `max + 1` | fill of `max` |
//! | boolean | `''`, `'abc'`, `'true'`, `'false'` | `true`, `false`, `1`, `0` |
//! | numeric | `NULL`, `0.0`, `'abc123'` | `0`, `1`, `123456789`, `-1`, `-123456789` |
//! | naturalnumber | `NULL`, `0`, `'abc123'`, `-1` | `1`, `99`, `123456789` |
//! | range | caller supplied | `min`, `max` |
//! | datetime | `NULL`, `0`, `-1`, `''`, `'abc'`, `'1234'`, `'1. January 2014'` | configured datetime |
//! | ip | 12 malformed forms | 8 IPv4 edge addresses |
//! | validForeignKey | `NULL`, `''`, `'abc123'`, `0`, `-1`, configured missing key | caller supplied |

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::fill::fill_to_length;
use crate::inputs::{InputOverride, InputSet};
use crate::reconcile::CandidateInputSet;
use crate::rule::RuleSpec;
use fieldcheck_core::Value;

/// Valid IPv4 inputs: all-zero, low edge, private-range edge, loopback
/// boundary on both sides, a common private address, a public address and
/// all-ones.
pub const VALID_IPV4: [&str; 8] = [
    "0.0.0.0",
    "1.0.0.0",
    "10.255.0.255",
    "126.255.255.255",
    "127.0.0.0",
    "192.168.1.5",
    "212.0.177.0",
    "255.255.255.255",
];

/// Alphanumeric probe shared by several rules
const ALPHANUMERIC: &str = "abc123";

/// Boundary input catalog
#[derive(Debug, Clone)]
pub struct RuleInputCatalog {
    datetime_valid_default: String,
    missing_foreign_key: i64,
    alphanumeric_foreign_key_probe: bool,
}

impl Default for RuleInputCatalog {
    fn default() -> Self {
        Self::from_config(&HarnessConfig::default())
    }
}

impl RuleInputCatalog {
    /// Build a catalog tuned by `config`
    pub fn from_config(config: &HarnessConfig) -> Self {
        RuleInputCatalog {
            datetime_valid_default: config.datetime_valid_default.clone(),
            missing_foreign_key: config.missing_foreign_key,
            alphanumeric_foreign_key_probe: config.alphanumeric_foreign_key_probe,
        }
    }

    /// Canonical inputs the rule must reject
    ///
    /// `range` has none; its invalid inputs always come from the caller.
    /// Length rules whose boundary text would be out of `i64` range have none.
    pub fn invalid_inputs(&self, spec: &RuleSpec) -> Vec<Value> {
        match *spec {
            RuleSpec::NotEmpty { .. } => vec![Value::from("")],
            RuleSpec::MinLength { min } => min
                .checked_sub(1)
                .map(|len| vec![Value::from(fill_to_length(len))])
                .unwrap_or_default(),
            RuleSpec::MaxLength { max } => max
                .checked_add(1)
                .map(|len| vec![Value::from(fill_to_length(len))])
                .unwrap_or_default(),
            RuleSpec::Boolean => vec![
                Value::from(""),
                Value::from("abc"),
                Value::from("true"),
                Value::from("false"),
            ],
            RuleSpec::Numeric => vec![Value::Null, Value::Float(0.0), Value::from(ALPHANUMERIC)],
            RuleSpec::NaturalNumber => vec![
                Value::Null,
                Value::Int(0),
                Value::from(ALPHANUMERIC),
                Value::Int(-1),
            ],
            RuleSpec::Range { .. } => Vec::new(),
            RuleSpec::DateTime => vec![
                Value::Null,
                Value::Int(0),
                Value::Int(-1),
                Value::from(""),
                Value::from("abc"),
                Value::from("1234"),
                Value::from("1. January 2014"),
            ],
            RuleSpec::IpAddress => vec![
                Value::Null,
                Value::Int(0),
                Value::Int(-1),
                Value::from(""),
                Value::from("abc"),
                Value::from("1234"),
                Value::Int(123456789),
                Value::from("192.0.0.x"),
                Value::from("192.168.1."),
                Value::from("0.0.0.0.0"),
                Value::from("192.168.1.0.1"),
                Value::from("255.255.255.256"),
            ],
            RuleSpec::ForeignKeyExists => {
                let mut invalid = vec![Value::Null, Value::from("")];
                if self.alphanumeric_foreign_key_probe {
                    invalid.push(Value::from(ALPHANUMERIC));
                }
                invalid.extend([
                    Value::Int(0),
                    Value::Int(-1),
                    Value::Int(self.missing_foreign_key),
                ]);
                invalid
            }
        }
    }

    /// Inputs the rule must accept when the caller supplies none
    ///
    /// `validForeignKey` has none: which keys exist depends on fixtures.
    pub fn default_valid_inputs(&self, spec: &RuleSpec) -> Vec<Value> {
        match *spec {
            RuleSpec::NotEmpty { valid_length } => vec![Value::from(fill_to_length(valid_length))],
            RuleSpec::MinLength { min } => vec![Value::from(fill_to_length(min))],
            RuleSpec::MaxLength { max } => vec![Value::from(fill_to_length(max))],
            RuleSpec::Boolean => vec![
                Value::Bool(true),
                Value::Bool(false),
                Value::Int(1),
                Value::Int(0),
            ],
            RuleSpec::Numeric => [0, 1, 123456789, -1, -123456789]
                .into_iter()
                .map(Value::Int)
                .collect(),
            RuleSpec::NaturalNumber => [1, 99, 123456789].into_iter().map(Value::Int).collect(),
            RuleSpec::Range { min, max } => vec![Value::Int(min), Value::Int(max)],
            RuleSpec::DateTime => vec![Value::from(self.datetime_valid_default.as_str())],
            RuleSpec::IpAddress => VALID_IPV4.iter().map(|ip| Value::from(*ip)).collect(),
            RuleSpec::ForeignKeyExists => Vec::new(),
        }
    }

    /// Build the reconciled candidate inputs for one check
    ///
    /// `extra_invalid` values are appended to the canonical invalid inputs;
    /// `InputSet::Skip` disables the invalid side altogether.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Precondition` when the parameters make the
    /// derivation meaningless.
    pub fn candidates(
        &self,
        spec: &RuleSpec,
        valid: InputOverride,
        extra_invalid: InputSet,
    ) -> HarnessResult<CandidateInputSet> {
        check_preconditions(spec, &valid, &extra_invalid)?;

        let invalid = match extra_invalid {
            InputSet::Skip => InputSet::Skip,
            InputSet::Values(extra) => {
                let mut invalid = self.invalid_inputs(spec);
                invalid.extend(extra);
                InputSet::Values(invalid)
            }
        };
        let valid = valid.resolve(|| self.default_valid_inputs(spec));

        Ok(CandidateInputSet::new(valid, invalid))
    }
}

fn check_preconditions(
    spec: &RuleSpec,
    valid: &InputOverride,
    extra_invalid: &InputSet,
) -> HarnessResult<()> {
    let rule = spec.name();
    let derives_valid = matches!(valid, InputOverride::Default);
    match *spec {
        RuleSpec::NotEmpty { valid_length } if derives_valid && valid_length < 1 => {
            Err(HarnessError::precondition(
                rule,
                format!("valid length must be at least 1, got {}", valid_length),
            ))
        }
        RuleSpec::MinLength { min } if min < 1 => Err(HarnessError::precondition(
            rule,
            format!("min length must be at least 1, got {}", min),
        )),
        RuleSpec::MaxLength { max } if max < 0 => Err(HarnessError::precondition(
            rule,
            format!("max length must not be negative, got {}", max),
        )),
        RuleSpec::MaxLength { max } if max == i64::MAX => Err(HarnessError::precondition(
            rule,
            "no text is longer than the max length",
        )),
        RuleSpec::Range { min, max } if min > max => Err(HarnessError::precondition(
            rule,
            format!("range min {} exceeds max {}", min, max),
        )),
        RuleSpec::Range { .. } if extra_invalid == &InputSet::empty() => {
            Err(HarnessError::precondition(
                rule,
                "range checks need caller-supplied invalid inputs",
            ))
        }
        _ => Ok(()),
    }
}
