//! Recognition of phone line type tokens.

use phonenumber::Type;

/// Legacy alias accepted for the fixed-line type.
const LANDLINE: &str = "LANDLINE";

/// Resolves an uppercased parameter token to a line type classification.
///
/// The legacy `LANDLINE` alias resolves to the fixed-line type before the
/// lookup. Returns `None` for tokens that do not name a classification
/// known to the numbering-plan library.
pub(super) fn from_token(token: &str) -> Option<Type> {
    let token = if token == LANDLINE { "FIXED_LINE" } else { token };
    let line_type = match token {
        "FIXED_LINE" => Type::FixedLine,
        "MOBILE" => Type::Mobile,
        "FIXED_LINE_OR_MOBILE" => Type::FixedLineOrMobile,
        "TOLL_FREE" => Type::TollFree,
        "PREMIUM_RATE" => Type::PremiumRate,
        "SHARED_COST" => Type::SharedCost,
        "PERSONAL_NUMBER" => Type::PersonalNumber,
        "VOIP" => Type::Voip,
        "PAGER" => Type::Pager,
        "UAN" => Type::Uan,
        "EMERGENCY" => Type::Emergency,
        "VOICEMAIL" => Type::Voicemail,
        "SHORT_CODE" => Type::ShortCode,
        "STANDARD_RATE" => Type::StandardRate,
        "CARRIER" => Type::Carrier,
        "NO_INTERNATIONAL" => Type::NoInternational,
        "UNKNOWN" => Type::Unknown,
        _ => return None,
    };
    Some(line_type)
}
