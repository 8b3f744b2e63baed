//! Input normalizers shared by all generators.
//!
//! Every generator runs raw field text through these before assembling a
//! descriptor. None of them fail: malformed input either passes through
//! untouched or is corrected in place.

use std::sync::LazyLock;

use regex::Regex;

/// Lowest VLAN ID emitted in commands.
pub const VLAN_ID_MIN: u16 = 1;

/// Highest VLAN ID emitted in commands (4095 is reserved).
pub const VLAN_ID_MAX: u16 = 4094;

/// Fractional digits used for coordinates.
pub const COORDINATE_PRECISION: usize = 5;

/// Extra digits expanded past the target precision before rounding.
///
/// Any f64 at least half a unit in the last requested place has an ulp
/// far larger than 10^-60, so the expansion never turns a near-tie into a
/// false tie.
const GUARD_DIGITS: usize = 60;

static ORG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+-[A-Z0-9]+$").expect("organization pattern compiles"));

/// Trim surrounding whitespace and uppercase.
pub fn normalize_token(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Parse a coordinate, accepting only finite decimal numbers.
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a numeric coordinate with five fractional digits.
///
/// Text that is not a finite number comes back unchanged.
pub fn normalize_coord(s: &str) -> String {
    match parse_coordinate(s) {
        Some(value) => format_fixed(value, COORDINATE_PRECISION),
        None => s.to_string(),
    }
}

/// Fixed-point rendering with ties rounded away from zero.
///
/// Matches the `Number.prototype.toFixed` convention operators are used to
/// seeing: `0.015625` becomes `0.01563` and `-0.000001` becomes `-0.00000`,
/// while negative zero renders without a sign.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let expanded = format!("{:.*}", precision + GUARD_DIGITS, value.abs());
    let (whole, fraction) = expanded.split_once('.').unwrap_or((&expanded, ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(precision))
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(precision)
        .is_some_and(|d| *d >= b'5');

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&b| b as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&b| b as char));
    }
    out
}

/// Force a VLAN ID into the usable range.
///
/// Anything above 4094 becomes 4094 and anything below 1 becomes 1.
pub fn clamp_vlan_id(n: i64) -> u16 {
    if n > i64::from(VLAN_ID_MAX) {
        VLAN_ID_MAX
    } else if n < i64::from(VLAN_ID_MIN) {
        VLAN_ID_MIN
    } else {
        n as u16
    }
}

/// Read the leading integer out of raw VLAN ID text.
///
/// Accepts an optional sign followed by digits and ignores whatever comes
/// after them, so `"12.7"` reads as 12. Returns `None` for blank or
/// non-numeric text. Values too large for `i64` saturate.
pub fn parse_vlan_id(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Check an organization code of the form `ORG-UNIT`.
///
/// Empty input is valid. A failed check is only a marker for the
/// presentation layer; descriptors are still built from the value.
pub fn validate_org(s: &str) -> bool {
    s.is_empty() || ORG_PATTERN.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  acme-br "), "ACME-BR");
        assert_eq!(normalize_token("gi0/24"), "GI0/24");
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token("   "), "");
    }

    #[test]
    fn test_normalize_coord_numeric() {
        assert_eq!(normalize_coord("-23.5"), "-23.50000");
        assert_eq!(normalize_coord("-46.633"), "-46.63300");
        assert_eq!(normalize_coord(" 10 "), "10.00000");
        assert_eq!(normalize_coord("0"), "0.00000");
        assert_eq!(normalize_coord("1e1"), "10.00000");
    }

    #[test]
    fn test_normalize_coord_non_numeric() {
        assert_eq!(normalize_coord("abc"), "abc");
        assert_eq!(normalize_coord(""), "");
        assert_eq!(normalize_coord("inf"), "inf");
        assert_eq!(normalize_coord("NaN"), "NaN");
        assert_eq!(normalize_coord("12abc"), "12abc");
    }

    #[test]
    fn test_format_fixed_rounding() {
        assert_eq!(format_fixed(-23.55555555, 5), "-23.55556");
        assert_eq!(format_fixed(1.234564, 5), "1.23456");
        assert_eq!(format_fixed(9.999996, 5), "10.00000");
        assert_eq!(format_fixed(99.999999, 2), "100.00");
    }

    #[test]
    fn test_format_fixed_ties_round_away_from_zero() {
        // 1/64 sits exactly halfway between 0.01562 and 0.01563
        assert_eq!(format_fixed(0.015625, 5), "0.01563");
        assert_eq!(format_fixed(-0.015625, 5), "-0.01563");
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_format_fixed_sign() {
        assert_eq!(format_fixed(-0.0, 5), "0.00000");
        assert_eq!(format_fixed(-0.000001, 5), "-0.00000");
    }

    #[test]
    fn test_formatted_coordinates_shape() {
        let pattern = Regex::new(r"^-?[0-9]+\.[0-9]{5}$").unwrap();
        for raw in ["-23.5", "0", "179.999999", "-0.1", "45", "-89.123456789"] {
            let formatted = normalize_coord(raw);
            assert!(pattern.is_match(&formatted), "{raw} -> {formatted}");
        }
    }

    #[test]
    fn test_clamp_vlan_id() {
        assert_eq!(clamp_vlan_id(5000), 4094);
        assert_eq!(clamp_vlan_id(4094), 4094);
        assert_eq!(clamp_vlan_id(4095), 4094);
        assert_eq!(clamp_vlan_id(100), 100);
        assert_eq!(clamp_vlan_id(1), 1);
        assert_eq!(clamp_vlan_id(0), 1);
        assert_eq!(clamp_vlan_id(-7), 1);
        assert_eq!(clamp_vlan_id(i64::MAX), 4094);
    }

    #[test]
    fn test_parse_vlan_id() {
        assert_eq!(parse_vlan_id("100"), Some(100));
        assert_eq!(parse_vlan_id(" 42 "), Some(42));
        assert_eq!(parse_vlan_id("-5"), Some(-5));
        assert_eq!(parse_vlan_id("+7"), Some(7));
        assert_eq!(parse_vlan_id("12.7"), Some(12));
        assert_eq!(parse_vlan_id("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_vlan_id(""), None);
        assert_eq!(parse_vlan_id("abc"), None);
        assert_eq!(parse_vlan_id("-"), None);
    }

    #[test]
    fn test_validate_org() {
        assert!(validate_org("CORP-UN01"));
        assert!(validate_org("A-1"));
        assert!(validate_org(""));
        assert!(!validate_org("BAD_CODE"));
        assert!(!validate_org("CORP"));
        assert!(!validate_org("CORP-UN01-X"));
        assert!(!validate_org("corp-un01"));
        assert!(!validate_org("-UN01"));
    }
}
