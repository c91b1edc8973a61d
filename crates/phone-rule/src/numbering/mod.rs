//! Thin facade over the bundled numbering-plan metadata.
//!
//! All knowledge about phone number grammar, country calling codes, and
//! number type classification lives in the [`phonenumber`] crate; this
//! module only adapts its API to the checks the rule needs. The metadata
//! database is a process-wide lazily-initialized read-only handle, so the
//! facade is safe to reuse across concurrent validation calls.

use phonenumber::{ParseError, PhoneNumber, Type, country, metadata::DATABASE};

/// Minimum number of digits in a national significant number.
const MIN_NSN_DIGITS: usize = 2;

/// Maximum number of digits in a national significant number.
const MAX_NSN_DIGITS: usize = 17;

/// Parses the value as a phone number with an optional default region hint.
///
/// Without a hint, only numbers in international form (leading `+`) parse.
#[inline]
pub(crate) fn parse(region: Option<country::Id>, value: &str) -> Result<PhoneNumber, ParseError> {
    phonenumber::parse(region, value)
}

/// Classifies the number within its numbering plan.
#[inline]
pub(crate) fn line_type(number: &PhoneNumber) -> Type {
    number.number_type(&DATABASE)
}

/// Returns `true` if the parsed number carries a country calling code.
#[inline]
pub(crate) fn has_country_code(number: &PhoneNumber) -> bool {
    number.country().code() > 0
}

/// Strict validity check against the full numbering-plan grammar.
#[inline]
pub(crate) fn is_valid(number: &PhoneNumber) -> bool {
    phonenumber::is_valid(number)
}

/// Strict validity check scoped to a region.
pub(crate) fn is_valid_for_region(number: &PhoneNumber, region: country::Id) -> bool {
    number.country().id() == Some(region) && phonenumber::is_valid(number)
}

/// Lenient check that the number has a plausible length for a numbering plan.
pub(crate) fn is_possible(number: &PhoneNumber) -> bool {
    (MIN_NSN_DIGITS..=MAX_NSN_DIGITS).contains(&nsn_digit_count(number))
}

/// Lenient check scoped to a region.
pub(crate) fn is_possible_for_region(number: &PhoneNumber, region: country::Id) -> bool {
    number.country().id() == Some(region) && is_possible(number)
}

/// Returns the length of the national significant number, counting the
/// leading zeros some numbering plans keep as part of the number.
fn nsn_digit_count(number: &PhoneNumber) -> usize {
    number.national().zeros() as usize + digit_count(number.national().value())
}

/// Returns the number of decimal digits in the value.
fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
