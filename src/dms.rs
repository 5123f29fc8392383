//! Degree-minute-second notation codec.
//!
//! The output format `{deg}°{min}'{sec:.2}"{dir}` is a de facto wire
//! format consumed by UI layers and must be reproduced exactly. All
//! splitting and recombination runs on decimals; only the final
//! direction choice looks at the sign.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::constants::{
    DEGREE_SYMBOL, EAST, MAX_LATITUDE, MAX_LONGITUDE, MINUTE_SYMBOL, MIN_LATITUDE, MIN_LONGITUDE,
    NORTH, SECOND_SYMBOL, SOUTH, WEST,
};
use crate::error::GeoError;
use crate::numeric::{DecimalContext, PRECISION_DIGITS};

const CTX: DecimalContext = DecimalContext::new(PRECISION_DIGITS);

/// Formats a decimal-degree latitude as e.g. `39°54'15.12"N`.
/// Returns `None` when the value is outside the global latitude bounds.
pub fn to_latitude_dms(degrees: &BigDecimal) -> Option<String> {
    if *degrees < *MIN_LATITUDE || *degrees > *MAX_LATITUDE {
        return None;
    }

    let dir = if degrees < &BigDecimal::from(0) { SOUTH } else { NORTH };
    Some(format_dms(degrees, dir))
}

/// Formats a decimal-degree longitude as e.g. `116°24'26.64"E`.
/// Returns `None` when the value is outside the global longitude bounds.
pub fn to_longitude_dms(degrees: &BigDecimal) -> Option<String> {
    if *degrees < *MIN_LONGITUDE || *degrees > *MAX_LONGITUDE {
        return None;
    }

    let dir = if degrees < &BigDecimal::from(0) { WEST } else { EAST };
    Some(format_dms(degrees, dir))
}

fn format_dms(degrees: &BigDecimal, dir: char) -> String {
    let sixty = BigDecimal::from(60);

    let abs = degrees.abs();
    let deg = abs.with_scale_round(0, RoundingMode::Down);
    let minutes = (&abs - &deg) * &sixty;
    let min = minutes.with_scale_round(0, RoundingMode::Down);
    // seconds rounded half-up to two decimals; a scale-2 decimal prints
    // with both places, matching the wire format
    let sec = ((&minutes - &min) * &sixty).with_scale_round(2, RoundingMode::HalfUp);

    format!(
        "{}{}{}{}{}{}{}",
        deg, DEGREE_SYMBOL, min, MINUTE_SYMBOL, sec, SECOND_SYMBOL, dir
    )
}

/// Parses a DMS string back into signed decimal degrees.
///
/// Blank input is `Ok(None)`, not an error; a non-blank string with
/// missing delimiters or non-numeric components is a format error. A
/// trailing `S` or `W` negates the result.
pub fn from_dms(s: &str) -> Result<Option<BigDecimal>, GeoError> {
    if s.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || GeoError::DmsFormat(s.to_string());

    // locate the three delimiters left to right
    let deg_end = s.find(DEGREE_SYMBOL).ok_or_else(malformed)?;
    let after_deg = deg_end + DEGREE_SYMBOL.len_utf8();
    let min_end = after_deg + s[after_deg..].find(MINUTE_SYMBOL).ok_or_else(malformed)?;
    let after_min = min_end + MINUTE_SYMBOL.len_utf8();
    let sec_end = after_min + s[after_min..].find(SECOND_SYMBOL).ok_or_else(malformed)?;

    let deg: BigDecimal = s[..deg_end].trim().parse().map_err(|_| malformed())?;
    let min: BigDecimal = s[after_deg..min_end].trim().parse().map_err(|_| malformed())?;
    let sec: BigDecimal = s[after_min..sec_end].trim().parse().map_err(|_| malformed())?;

    let mut value =
        deg + CTX.div(&min, &BigDecimal::from(60)) + CTX.div(&sec, &BigDecimal::from(3600));
    if matches!(s.chars().last(), Some(c) if c == SOUTH || c == WEST) {
        value = -value;
    }

    Ok(Some(value))
}
