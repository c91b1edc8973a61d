//! The phone number validation rule.

use self::constraints::{AUTO_DETECTION_REGION, ResolvedConstraints};
use crate::{Map, error::RuleError, numbering};
use phonenumber::country;
use std::str::FromStr;

mod constraints;
mod line_type;

/// A declarative validation rule for telephone numbers.
///
/// The rule is stateless: every call resolves its constraints afresh from
/// the supplied parameter tokens and a snapshot of the sibling form data,
/// so a single instance can be shared freely across fields and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneRule;

impl PhoneRule {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Validates a phone number submitted for the named attribute.
    ///
    /// `parameters` are the raw tokens of the rule declaration, matched
    /// case-insensitively: two-letter country codes, line type names,
    /// `AUTO`, and `LENIENT`. `data` gives read access to the sibling
    /// fields of the submission so a companion `{attribute}_country` field
    /// can supply the country instead.
    ///
    /// Returns `Ok(false)` when the value is not an acceptable number for
    /// any resolved candidate country; errors are reserved for misdeclared
    /// rules and should be surfaced to the rule author.
    pub fn validate<S: AsRef<str>>(
        &self,
        attribute: &str,
        value: &str,
        parameters: &[S],
        data: &Map,
    ) -> Result<bool, RuleError> {
        let parameters = parameters
            .iter()
            .map(|token| token.as_ref().to_uppercase())
            .collect::<Vec<_>>();
        let constraints = constraints::resolve(attribute, &parameters, data)?;
        Ok(evaluate(value, &constraints))
    }
}

/// Evaluates the value against each candidate country in order, accepting
/// the first success. Unparseable candidates miss silently; only exhausting
/// every candidate yields `false`.
fn evaluate(value: &str, constraints: &ResolvedConstraints) -> bool {
    for candidate in &constraints.countries {
        let region = if candidate == AUTO_DETECTION_REGION {
            None
        } else if let Ok(region) = country::Id::from_str(candidate) {
            Some(region)
        } else {
            // Syntactically valid but unassigned country codes miss silently.
            tracing::debug!("unassigned country code `{candidate}`");
            continue;
        };
        let Ok(number) = numbering::parse(region, value) else {
            tracing::debug!("failed to parse `{value}` for the region `{candidate}`");
            continue;
        };

        // Without a type restriction, a number carrying a country calling
        // code passes; otherwise its classification must be listed.
        let types = &constraints.types;
        let type_matches = (types.is_empty() && numbering::has_country_code(&number))
            || types.contains(&numbering::line_type(&number));
        if !type_matches {
            continue;
        }

        match region {
            // Automatic detection has exactly one candidate and terminates
            // the evaluation either way.
            None => {
                return if constraints.lenient {
                    numbering::is_possible(&number)
                } else {
                    numbering::is_valid(&number)
                };
            }
            Some(region) => {
                let acceptable = if constraints.lenient {
                    numbering::is_possible_for_region(&number, region)
                } else {
                    numbering::is_valid_for_region(&number, region)
                };
                if acceptable {
                    return true;
                }
            }
        }
    }
    false
}
