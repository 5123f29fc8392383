use bigdecimal::{BigDecimal, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CHINA_MAX_LAT, CHINA_MAX_LNG, CHINA_MIN_LAT, CHINA_MIN_LNG, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
use crate::error::GeoError;
use crate::numeric::to_f64;

/// Bounds-checked longitude and latitude in decimal degrees.
///
/// Components are arbitrary-precision decimals, not binary floats, so
/// values survive chained datum and DMS computations without drift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: BigDecimal,
    lng: BigDecimal,
}

impl Coordinate {
    pub fn new(lat: BigDecimal, lng: BigDecimal) -> Result<Self, GeoError> {
        if lat < *MIN_LATITUDE || lat > *MAX_LATITUDE {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }

        if lng < *MIN_LONGITUDE || lng > *MAX_LONGITUDE {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }

        Ok(Self { lat, lng })
    }

    /// Convenience constructor from binary floats; rejects NaN and
    /// infinities before the usual range validation.
    pub fn from_f64(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let lat_dec = BigDecimal::from_f64(lat).ok_or(GeoError::NotFinite(lat))?;
        let lng_dec = BigDecimal::from_f64(lng).ok_or(GeoError::NotFinite(lng))?;
        Self::new(lat_dec, lng_dec)
    }

    /// The datum transforms only ever nudge an in-China point by well
    /// under a degree, so their outputs stay inside the global bounds.
    pub(crate) fn new_unchecked(lat: BigDecimal, lng: BigDecimal) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> &BigDecimal {
        &self.lat
    }

    pub fn lng(&self) -> &BigDecimal {
        &self.lng
    }

    /// Latitude narrowed to `f64`, for the geodesic seam and the
    /// ray-casting plane.
    pub fn lat_f64(&self) -> f64 {
        to_f64(&self.lat)
    }

    /// Longitude narrowed to `f64`.
    pub fn lng_f64(&self) -> f64 {
        to_f64(&self.lng)
    }

    /// True when the point lies outside mainland China's bounding box.
    /// Such points are treated as rest-of-world by the datum transforms.
    pub fn is_out_of_china(&self) -> bool {
        self.lng < *CHINA_MIN_LNG
            || self.lng > *CHINA_MAX_LNG
            || self.lat < *CHINA_MIN_LAT
            || self.lat > *CHINA_MAX_LAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::dec;

    #[test]
    fn test_valid_input() {
        assert!(Coordinate::from_f64(0., 0.).is_ok());

        // latitude extremes
        assert!(Coordinate::from_f64(-90.0, 0.).is_ok());
        assert!(Coordinate::from_f64(90.0, 0.).is_ok());

        // longitude extremes
        assert!(Coordinate::from_f64(0., -180.0).is_ok());
        assert!(Coordinate::from_f64(0., 180.0).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        // latitude out-of-bounds
        assert!(Coordinate::from_f64(-91., 0.).is_err());
        assert!(Coordinate::from_f64(91., 0.).is_err());

        // longitude out-of-bounds
        assert!(Coordinate::from_f64(0., -181.).is_err());
        assert!(Coordinate::from_f64(0., 181.).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Coordinate::from_f64(f64::NAN, 0.),
            Err(GeoError::NotFinite(_))
        ));
        assert!(matches!(
            Coordinate::from_f64(0., f64::INFINITY),
            Err(GeoError::NotFinite(_))
        ));
    }

    #[test]
    fn test_decimal_components_survive_unchanged() {
        let c = Coordinate::new(dec("39.9042"), dec("116.4074")).unwrap();
        assert_eq!(c.lat(), &dec("39.9042"));
        assert_eq!(c.lng(), &dec("116.4074"));
    }

    #[test]
    fn test_out_of_china() {
        // Beijing
        assert!(!Coordinate::from_f64(39.9042, 116.4074).unwrap().is_out_of_china());

        // Shanghai, The Bund
        assert!(!Coordinate::from_f64(31.2400, 121.4900).unwrap().is_out_of_china());

        // Los Angeles
        assert!(Coordinate::from_f64(34.0522, -118.2437).unwrap().is_out_of_china());

        // Sydney
        assert!(Coordinate::from_f64(-33.8568, 151.2153).unwrap().is_out_of_china());
    }

    #[test]
    fn test_value_equality() {
        let a = Coordinate::new(dec("39.9042"), dec("116.4074")).unwrap();
        // equality is numeric, independent of trailing zeros
        let b = Coordinate::new(dec("39.90420"), dec("116.40740")).unwrap();
        assert_eq!(a, b);
    }
}
