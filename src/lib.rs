//! Geographic coordinate and polygon geometry engine.
//!
//! Decimal-degree coordinates on WGS-84, transforms to and from the
//! GCJ-02 obfuscated datum (and Baidu's BD-09 on top of it), DMS string
//! conversion, and ellipsoidal geodesy aggregates: point-to-point
//! distance, polygon perimeter, spherical-excess polygon area and
//! anti-meridian-safe point-in-polygon membership.
//!
//! Coordinate components and the datum arithmetic are arbitrary-
//! precision decimals ([`bigdecimal::BigDecimal`]) rounded through an
//! explicit [`DecimalContext`]; only the geodesic solver and the
//! transcendental evaluations run in `f64`.
//!
//! All functions are pure and stateless; they operate on caller-owned
//! immutable inputs and return freshly allocated results.

pub mod constants;
pub mod coordinate;
pub mod datum;
pub mod dms;
pub mod error;
pub mod geodesy;
pub mod numeric;
pub mod polygon;

pub use bigdecimal::BigDecimal;
pub use coordinate::Coordinate;
pub use datum::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
};
pub use dms::{from_dms, to_latitude_dms, to_longitude_dms};
pub use error::GeoError;
pub use geodesy::{distance, GeodesicCalculator, KarneyCalculator};
pub use numeric::{DecimalContext, PRECISION_DIGITS};
pub use polygon::{area, area_with, contains, perimeter, perimeter_with};
