//! Datum transforms between WGS-84, the GCJ-02 obfuscated datum used by
//! Chinese map providers, and BD-09 (Baidu's further offset of GCJ-02).
//!
//! Both GCJ-02 directions share one offset computation and differ only
//! in sign. The inverse is therefore a documented approximation, not an
//! exact algebraic inverse; accuracy is in the 50-500 m range, which is
//! the accepted upstream behavior for this datum family.
//!
//! The polynomial, harmonic-weight and curvature arithmetic runs on
//! decimals through an explicit [`DecimalContext`]; the sine and cosine
//! evaluations round-trip through `f64`, which has no decimal
//! equivalent and matches how the reference arithmetic handles
//! transcendentals.

use std::f64::consts::PI;

use bigdecimal::BigDecimal;

use crate::constants::{
    GCJ02_EE, GCJ02_REF_LAT, GCJ02_REF_LNG, GCJ02_SEMI_MAJOR, PI_DECIMAL, X_PI,
};
use crate::coordinate::Coordinate;
use crate::numeric::{dec, dec_from_f64, to_f64, DecimalContext, PRECISION_DIGITS};

const CTX: DecimalContext = DecimalContext::new(PRECISION_DIGITS);

// The literal weights in the two offset polynomials must match other
// GCJ-02 implementations bit-for-bit. Do not reorder or simplify.

fn transform_lat(x: &BigDecimal, y: &BigDecimal, ctx: &DecimalContext) -> BigDecimal {
    let xf = to_f64(x);
    let yf = to_f64(y);

    let mut ret = dec("-100.0")
        + dec("2.0") * x
        + dec("3.0") * y
        + dec("0.2") * y * y
        + dec("0.1") * x * y
        + dec("0.2") * ctx.sqrt_abs(x);

    let three = BigDecimal::from(3);
    ret += ctx.div(
        &((dec("20.0") * dec_from_f64((6.0 * xf * PI).sin())
            + dec("20.0") * dec_from_f64((2.0 * xf * PI).sin()))
            * dec("2.0")),
        &three,
    );
    ret += ctx.div(
        &((dec("20.0") * dec_from_f64((yf * PI).sin())
            + dec("40.0") * dec_from_f64((yf / 3.0 * PI).sin()))
            * dec("2.0")),
        &three,
    );
    ret += ctx.div(
        &((dec("160.0") * dec_from_f64((yf / 12.0 * PI).sin())
            + dec("320.0") * dec_from_f64((yf * PI / 30.0).sin()))
            * dec("2.0")),
        &three,
    );

    ctx.round(ret)
}

fn transform_lng(x: &BigDecimal, y: &BigDecimal, ctx: &DecimalContext) -> BigDecimal {
    let xf = to_f64(x);

    let mut ret = dec("300.0")
        + x
        + dec("2.0") * y
        + dec("0.1") * x * x
        + dec("0.1") * x * y
        + dec("0.1") * ctx.sqrt_abs(x);

    let three = BigDecimal::from(3);
    ret += ctx.div(
        &((dec("20.0") * dec_from_f64((6.0 * xf * PI).sin())
            + dec("20.0") * dec_from_f64((2.0 * xf * PI).sin()))
            * dec("2.0")),
        &three,
    );
    ret += ctx.div(
        &((dec("20.0") * dec_from_f64((xf * PI).sin())
            + dec("40.0") * dec_from_f64((xf / 3.0 * PI).sin()))
            * dec("2.0")),
        &three,
    );
    ret += ctx.div(
        &((dec("150.0") * dec_from_f64((xf / 12.0 * PI).sin())
            + dec("300.0") * dec_from_f64((xf / 30.0 * PI).sin()))
            * dec("2.0")),
        &three,
    );

    ctx.round(ret)
}

/// Degree offset (Δlat, Δlng) of GCJ-02 relative to WGS-84 at the given
/// point. The raw polynomial output is scaled by the radius of curvature
/// of the reference ellipsoid at the input latitude.
fn delta(lat: &BigDecimal, lng: &BigDecimal, ctx: &DecimalContext) -> (BigDecimal, BigDecimal) {
    let x = lng - &*GCJ02_REF_LNG;
    let y = lat - &*GCJ02_REF_LAT;
    let d_lat = transform_lat(&x, &y, ctx);
    let d_lng = transform_lng(&x, &y, ctx);

    let rad_lat = to_f64(lat).to_radians();
    let sin_lat = dec_from_f64(rad_lat.sin());
    let cos_lat = dec_from_f64(rad_lat.cos());

    let magic = dec("1.0") - &*GCJ02_EE * &sin_lat * &sin_lat;
    let sqrt_magic = ctx.sqrt_abs(&magic);

    let one_eighty = dec("180.0");
    let lat_curvature = ctx.div(
        &(&*GCJ02_SEMI_MAJOR * (dec("1.0") - &*GCJ02_EE)),
        &(&magic * &sqrt_magic),
    ) * &*PI_DECIMAL;
    let lng_curvature = ctx.div(&GCJ02_SEMI_MAJOR, &sqrt_magic) * &cos_lat * &*PI_DECIMAL;

    let d_lat = ctx.div(&(d_lat * &one_eighty), &lat_curvature);
    let d_lng = ctx.div(&(d_lng * &one_eighty), &lng_curvature);

    (d_lat, d_lng)
}

/// WGS-84 → GCJ-02. Points outside China pass through unchanged.
pub fn wgs84_to_gcj02(c: &Coordinate) -> Coordinate {
    if c.is_out_of_china() {
        return c.clone();
    }

    let (d_lat, d_lng) = delta(c.lat(), c.lng(), &CTX);
    Coordinate::new_unchecked(c.lat() + d_lat, c.lng() + d_lng)
}

/// GCJ-02 → WGS-84 by applying the forward offset with the opposite
/// sign. Points outside China pass through unchanged.
pub fn gcj02_to_wgs84(c: &Coordinate) -> Coordinate {
    if c.is_out_of_china() {
        return c.clone();
    }

    let (d_lat, d_lng) = delta(c.lat(), c.lng(), &CTX);
    Coordinate::new_unchecked(c.lat() - d_lat, c.lng() - d_lng)
}

/// GCJ-02 → BD-09. Points outside China pass through unchanged.
pub fn gcj02_to_bd09(c: &Coordinate) -> Coordinate {
    if c.is_out_of_china() {
        return c.clone();
    }

    let (lat, lng) = (c.lat_f64(), c.lng_f64());
    let z = lng.hypot(lat) + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    Coordinate::new_unchecked(
        dec_from_f64(z * theta.sin() + 0.006),
        dec_from_f64(z * theta.cos() + 0.0065),
    )
}

/// BD-09 → GCJ-02. Points outside China pass through unchanged.
pub fn bd09_to_gcj02(c: &Coordinate) -> Coordinate {
    if c.is_out_of_china() {
        return c.clone();
    }

    let x = c.lng_f64() - 0.0065;
    let y = c.lat_f64() - 0.006;
    let z = x.hypot(y) - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    Coordinate::new_unchecked(dec_from_f64(z * theta.sin()), dec_from_f64(z * theta.cos()))
}

/// WGS-84 → BD-09 via GCJ-02.
pub fn wgs84_to_bd09(c: &Coordinate) -> Coordinate {
    gcj02_to_bd09(&wgs84_to_gcj02(c))
}

/// BD-09 → WGS-84 via GCJ-02.
pub fn bd09_to_wgs84(c: &Coordinate) -> Coordinate {
    gcj02_to_wgs84(&bd09_to_gcj02(c))
}
