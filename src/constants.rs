//! Fixed numeric constants shared across the engine.
//!
//! Everything here is a process-wide read-only value with no
//! initialization order dependency. The GCJ-02 values in particular are
//! not derivable from first principles and must match other GCJ-02
//! implementations bit-for-bit, so they all live in this single
//! reviewable table.

use std::f64::consts::PI;

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;

use crate::numeric::dec;

/// Semi-major axis used by the GCJ-02 offset formula, in meters.
/// This is the Krasovsky 1940 value every GCJ-02 implementation uses.
pub static GCJ02_SEMI_MAJOR: Lazy<BigDecimal> = Lazy::new(|| dec("6378245.0"));

/// First eccentricity squared used by the GCJ-02 offset formula.
pub static GCJ02_EE: Lazy<BigDecimal> = Lazy::new(|| dec("0.00669342162296594323"));

/// Fixed reference point of the GCJ-02 offset polynomials: 105°E, 35°N.
pub static GCJ02_REF_LNG: Lazy<BigDecimal> = Lazy::new(|| dec("105.0"));
pub static GCJ02_REF_LAT: Lazy<BigDecimal> = Lazy::new(|| dec("35.0"));

/// π widened past the 34-digit decimal context so context rounding, not
/// the literal, is the precision limit.
pub static PI_DECIMAL: Lazy<BigDecimal> =
    Lazy::new(|| dec("3.14159265358979323846264338327950288"));

/// BD-09 perturbation frequency (π × 3000 / 180), the fixed angular
/// scale in Baidu's offset of GCJ-02.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// WGS-84 semi-major axis, in meters.
pub const WGS84_SEMI_MAJOR: f64 = 6_378_137.0;

/// WGS-84 semi-minor axis, in meters.
pub const WGS84_SEMI_MINOR: f64 = 6_356_752.314_245_179_3;

/// Mean earth radius used to convert geodesic side lengths into angular
/// arcs for the spherical-excess area approximation.
pub const MEAN_EARTH_RADIUS: f64 = (WGS84_SEMI_MAJOR + WGS84_SEMI_MINOR) / 2.0;

/// Global decimal-degree bounds.
pub static MIN_LATITUDE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(-90));
pub static MAX_LATITUDE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(90));
pub static MIN_LONGITUDE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(-180));
pub static MAX_LONGITUDE: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(180));

/// Bounding box of mainland China's extremities. Points outside this box
/// are treated as rest-of-world by the datum transforms; this is not a
/// literal validity check.
pub static CHINA_MIN_LNG: Lazy<BigDecimal> = Lazy::new(|| dec("72.004"));
pub static CHINA_MAX_LNG: Lazy<BigDecimal> = Lazy::new(|| dec("137.8347"));
pub static CHINA_MIN_LAT: Lazy<BigDecimal> = Lazy::new(|| dec("0.8293"));
pub static CHINA_MAX_LAT: Lazy<BigDecimal> = Lazy::new(|| dec("55.8271"));

/// DMS notation symbols.
pub const DEGREE_SYMBOL: char = '°';
pub const MINUTE_SYMBOL: char = '\'';
pub const SECOND_SYMBOL: char = '"';

/// Direction markers appended to DMS strings.
pub const NORTH: char = 'N';
pub const SOUTH: char = 'S';
pub const EAST: char = 'E';
pub const WEST: char = 'W';
