//! Resolution of declarative rule parameters into validation constraints.

use super::line_type;
use crate::{Map, error::RuleError};
use phonenumber::Type;
use smallvec::SmallVec;

/// Marker token enabling automatic country detection.
const AUTO: &str = "AUTO";

/// Marker token switching to possibility-only checks.
const LENIENT: &str = "LENIENT";

/// Sentinel region reserved for automatic country detection.
pub(super) const AUTO_DETECTION_REGION: &str = "ZZ";

/// Constraints resolved for a single validation call.
///
/// Built afresh from the uppercased parameter tokens and a snapshot of the
/// sibling data; never reused across calls.
#[derive(Debug, Default)]
pub(super) struct ResolvedConstraints {
    /// Candidate countries to attempt, in declaration order.
    pub(super) countries: SmallVec<[String; 4]>,
    /// Whether to run possibility checks instead of full validity checks.
    pub(super) lenient: bool,
    /// Accepted line type classifications; empty means any type.
    pub(super) types: SmallVec<[Type; 4]>,
}

/// Resolves the uppercased parameter tokens and the sibling data into the
/// constraints for one validation call.
pub(super) fn resolve(
    attribute: &str,
    parameters: &[String],
    data: &Map,
) -> Result<ResolvedConstraints, RuleError> {
    let countries = determine_countries(attribute, parameters, data)?;
    let lenient = parameters.iter().any(|token| token == LENIENT);
    let types = determine_types(parameters);
    check_leftover_parameters(parameters)?;
    Ok(ResolvedConstraints {
        countries,
        lenient,
        types,
    })
}

/// Checks the syntactic validity of a country code: exactly two uppercase
/// ASCII letters, excluding the reserved `ZZ` sentinel. Whether the code is
/// assigned to an actual numbering plan is not checked here.
pub(super) fn is_country_code(token: &str) -> bool {
    token.len() == 2
        && token != AUTO_DETECTION_REGION
        && token.bytes().all(|byte| byte.is_ascii_uppercase())
}

/// Determines the candidate countries for the attribute.
///
/// A companion `{attribute}_country` field takes precedence over the
/// declared parameters; an unusable companion value yields no candidates so
/// the validation fails without raising a configuration error.
fn determine_countries(
    attribute: &str,
    parameters: &[String],
    data: &Map,
) -> Result<SmallVec<[String; 4]>, RuleError> {
    let country_field = format!("{attribute}_country");
    if let Some(companion) = data.get(&country_field) {
        let code = companion.as_str().unwrap_or_default();
        if is_country_code(code) {
            return Ok(SmallVec::from_elem(code.to_owned(), 1));
        }
        tracing::debug!("unusable country value `{code}` in the field `{country_field}`");
        return Ok(SmallVec::new());
    }
    if parameters.iter().any(|token| token == AUTO) {
        return Ok(SmallVec::from_elem(AUTO_DETECTION_REGION.to_owned(), 1));
    }

    let countries = parameters
        .iter()
        .filter(|token| is_country_code(token.as_str()))
        .cloned()
        .collect::<SmallVec<[String; 4]>>();
    if countries.is_empty() {
        tracing::warn!("no valid country to validate the field `{attribute}` against");
        return Err(RuleError::NoValidCountry);
    }
    Ok(countries)
}

/// Determines the accepted line types from the recognized type tokens.
///
/// When the declaration names both `FIXED_LINE` and `MOBILE`, the ambiguous
/// fixed-line-or-mobile classification is accepted as well, for numbering
/// plans where the two cannot be told apart without a carrier lookup.
fn determine_types(parameters: &[String]) -> SmallVec<[Type; 4]> {
    let mut types = parameters
        .iter()
        .filter_map(|token| line_type::from_token(token))
        .collect::<SmallVec<[Type; 4]>>();
    let fixed_and_mobile = parameters.iter().any(|token| token == "FIXED_LINE")
        && parameters.iter().any(|token| token == "MOBILE");
    if fixed_and_mobile && !types.contains(&Type::FixedLineOrMobile) {
        types.push(Type::FixedLineOrMobile);
    }
    types
}

/// Rejects parameter tokens that were not consumed by any resolution step.
///
/// Runs after country, lenient, and type resolution as a single difference
/// over the union of all recognized token categories, so it only flags truly
/// unrecognized tokens, guarding against silent typos in rule declarations.
fn check_leftover_parameters(parameters: &[String]) -> Result<(), RuleError> {
    let leftovers = parameters
        .iter()
        .filter(|token| {
            let token = token.as_str();
            !(token == AUTO
                || token == LENIENT
                || is_country_code(token)
                || line_type::from_token(token).is_some())
        })
        .cloned()
        .collect::<Vec<_>>();
    if leftovers.is_empty() {
        Ok(())
    } else {
        tracing::warn!("unrecognized rule parameters `{}`", leftovers.join(", "));
        Err(RuleError::InvalidParameter(leftovers))
    }
}

#[cfg(test)]
mod tests {
    use super::{ResolvedConstraints, is_country_code, resolve};
    use crate::{Map, error::RuleError, json};
    use phonenumber::Type;

    fn uppercased(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_uppercase()).collect()
    }

    fn resolved(tokens: &[&str]) -> ResolvedConstraints {
        resolve("phone", &uppercased(tokens), &Map::new()).unwrap()
    }

    #[test]
    fn it_checks_country_code_syntax() {
        assert!(is_country_code("US"));
        assert!(is_country_code("DE"));
        assert!(!is_country_code("ZZ"));
        assert!(!is_country_code("us"));
        assert!(!is_country_code("USA"));
        assert!(!is_country_code("U1"));
        assert!(!is_country_code(""));
    }

    #[test]
    fn it_resolves_countries_in_declaration_order() {
        let constraints = resolved(&["GB", "US"]);
        assert_eq!(constraints.countries.as_slice(), ["GB", "US"]);
        assert!(!constraints.lenient);
        assert!(constraints.types.is_empty());
    }

    #[test]
    fn it_resolves_automatic_detection() {
        let constraints = resolved(&["AUTO"]);
        assert_eq!(constraints.countries.as_slice(), ["ZZ"]);

        // Automatic detection wins over explicit countries.
        let constraints = resolved(&["US", "AUTO"]);
        assert_eq!(constraints.countries.as_slice(), ["ZZ"]);
    }

    #[test]
    fn it_sets_the_lenient_flag() {
        assert!(resolved(&["US", "LENIENT"]).lenient);
        assert!(!resolved(&["US"]).lenient);
    }

    #[test]
    fn it_resolves_type_tokens() {
        let constraints = resolved(&["US", "MOBILE"]);
        assert_eq!(constraints.types.as_slice(), [Type::Mobile]);

        let constraints = resolved(&["US", "LANDLINE"]);
        assert_eq!(constraints.types.as_slice(), [Type::FixedLine]);
    }

    #[test]
    fn it_widens_to_the_ambiguous_type() {
        let constraints = resolved(&["US", "FIXED_LINE", "MOBILE"]);
        assert!(constraints.types.contains(&Type::FixedLineOrMobile));

        // The widening keys on the original tokens, not the alias.
        let constraints = resolved(&["US", "LANDLINE", "MOBILE"]);
        assert!(!constraints.types.contains(&Type::FixedLineOrMobile));
    }

    #[test]
    fn it_prefers_the_companion_country_field() {
        let mut data = Map::new();
        data.insert("phone_country".to_owned(), json!("GB"));
        let constraints = resolve("phone", &uppercased(&["US"]), &data).unwrap();
        assert_eq!(constraints.countries.as_slice(), ["GB"]);
    }

    #[test]
    fn it_yields_no_candidates_for_an_unusable_companion_value() {
        for value in [json!(""), json!("usa"), json!("us"), json!(42)] {
            let mut data = Map::new();
            data.insert("phone_country".to_owned(), value);
            let constraints = resolve("phone", &[], &data).unwrap();
            assert!(constraints.countries.is_empty());
        }
    }

    #[test]
    fn it_fails_without_a_resolvable_country() {
        let err = resolve("phone", &uppercased(&["MOBILE"]), &Map::new()).unwrap_err();
        assert_eq!(err, RuleError::NoValidCountry);

        // The sentinel is never a literal resolvable country.
        let err = resolve("phone", &uppercased(&["ZZ"]), &Map::new()).unwrap_err();
        assert_eq!(err, RuleError::NoValidCountry);
    }

    #[test]
    fn it_flags_leftover_tokens() {
        let err = resolve("phone", &uppercased(&["US", "XX_BOGUS", "LENIENT"]), &Map::new())
            .unwrap_err();
        assert_eq!(err, RuleError::InvalidParameter(vec!["XX_BOGUS".to_owned()]));
    }
}
