//! ASN input validation.

use crate::config::{MAX_ASN, MIN_ASN};
use crate::error::AsnError;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for a plain run of digits, no sign, no `AS` prefix.
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Validate an ASN typed by the operator.
///
/// Accepts the text iff it is all digits and its value lies in
/// [`MIN_ASN`]..=[`MAX_ASN`]. Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use asn_prefix_commands::validate::validate_asn;
/// assert_eq!(validate_asn("13335").unwrap(), 13335);
/// assert!(validate_asn("AS13335").is_err());
/// ```
pub fn validate_asn(input: &str) -> Result<u32, AsnError> {
    let text = input.trim();
    let invalid = |reason: String| AsnError::InvalidInput {
        input: input.to_string(),
        reason,
    };

    if !get_digits_regex().is_match(text) {
        return Err(invalid("must contain digits only".to_string()));
    }
    // Digit runs too long for u32 are out of range as well
    let asn: u32 = text
        .parse()
        .map_err(|_| invalid(format!("must be between {MIN_ASN} and {MAX_ASN}")))?;
    if !(MIN_ASN..=MAX_ASN).contains(&asn) {
        return Err(invalid(format!("must be between {MIN_ASN} and {MAX_ASN}")));
    }

    log::debug!("validate_asn({input}) => {asn}");
    Ok(asn)
}
