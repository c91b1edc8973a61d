//! Configuration errors raised for misdeclared rules.
use std::{error, fmt};

/// An error in the declaration of the rule itself.
///
/// Distinguished from an ordinary failed validation, which is a plain
/// `false`: these errors signal a misdeclared rule and should be surfaced
/// to the rule author, not treated as invalid user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No usable country could be resolved from the rule parameters,
    /// the `AUTO` marker, or a companion country field.
    NoValidCountry,
    /// One or more parameter tokens were not recognized as a country code,
    /// the lenient marker, a number type, or the `AUTO` marker.
    /// Carries the offending tokens in their original order.
    InvalidParameter(Vec<String>),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidCountry => {
                write!(f, "the rule declaration does not resolve to a valid country")
            }
            Self::InvalidParameter(tokens) => {
                write!(f, "invalid rule parameters: `{}`", tokens.join(", "))
            }
        }
    }
}

impl error::Error for RuleError {}
