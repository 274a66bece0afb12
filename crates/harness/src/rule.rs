//! Rule types and their parameters
//!
//! A `RuleSpec` names one validation rule and carries the parameters the
//! catalog needs to derive boundary inputs for it. It is built per check and
//! never shared between checks.

use std::fmt;

/// The validation rule kinds the catalog knows boundary inputs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Field must not be empty
    NotEmpty,
    /// String must be at least N characters
    MinLength,
    /// String must be at most N characters
    MaxLength,
    /// Field must be a boolean
    Boolean,
    /// Field must be an integral number
    Numeric,
    /// Field must be a positive integer
    NaturalNumber,
    /// Field must lie within a closed range
    Range,
    /// Field must be a datetime
    DateTime,
    /// Field must be an IPv4 address
    IpAddress,
    /// Field must reference an existing record
    ForeignKeyExists,
}

impl RuleKind {
    /// Get all rule kinds
    pub fn all() -> Vec<RuleKind> {
        vec![
            RuleKind::NotEmpty,
            RuleKind::MinLength,
            RuleKind::MaxLength,
            RuleKind::Boolean,
            RuleKind::Numeric,
            RuleKind::NaturalNumber,
            RuleKind::Range,
            RuleKind::DateTime,
            RuleKind::IpAddress,
            RuleKind::ForeignKeyExists,
        ]
    }

    /// Rule name as reported in failure diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::NotEmpty => "notempty",
            RuleKind::MinLength => "minlength",
            RuleKind::MaxLength => "maxlength",
            RuleKind::Boolean => "boolean",
            RuleKind::Numeric => "numeric",
            RuleKind::NaturalNumber => "naturalnumber",
            RuleKind::Range => "range",
            RuleKind::DateTime => "datetime",
            RuleKind::IpAddress => "ip",
            RuleKind::ForeignKeyExists => "validForeignKey",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSpec {
    /// Not-empty; `valid_length` is the length of the derived valid string
    NotEmpty {
        /// Length of the derived valid string
        valid_length: i64,
    },
    /// Minimum length
    MinLength {
        /// Shortest valid length
        min: i64,
    },
    /// Maximum length
    MaxLength {
        /// Longest valid length
        max: i64,
    },
    /// Boolean
    Boolean,
    /// Numeric
    Numeric,
    /// Natural number
    NaturalNumber,
    /// Closed range `[min, max]`
    Range {
        /// Lower bound, valid
        min: i64,
        /// Upper bound, valid
        max: i64,
    },
    /// Datetime
    DateTime,
    /// IPv4 address
    IpAddress,
    /// Foreign key existence
    ForeignKeyExists,
}

impl RuleSpec {
    /// The kind of rule this spec parameterizes
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleSpec::NotEmpty { .. } => RuleKind::NotEmpty,
            RuleSpec::MinLength { .. } => RuleKind::MinLength,
            RuleSpec::MaxLength { .. } => RuleKind::MaxLength,
            RuleSpec::Boolean => RuleKind::Boolean,
            RuleSpec::Numeric => RuleKind::Numeric,
            RuleSpec::NaturalNumber => RuleKind::NaturalNumber,
            RuleSpec::Range { .. } => RuleKind::Range,
            RuleSpec::DateTime => RuleKind::DateTime,
            RuleSpec::IpAddress => RuleKind::IpAddress,
            RuleSpec::ForeignKeyExists => RuleKind::ForeignKeyExists,
        }
    }

    /// Rule name as reported in failure diagnostics
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
