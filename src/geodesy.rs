//! WGS-84 ellipsoidal distance, treated as an external capability.
//!
//! The engine never reimplements a geodesic solver; it marshals
//! coordinates into the `geo` crate's Karney implementation. The
//! [`GeodesicCalculator`] trait is the narrow seam that lets callers
//! substitute another routine (e.g. Vincenty) without touching the
//! perimeter/area logic. The solver works in binary floats, so decimal
//! coordinates are narrowed at this boundary.

use geo::algorithm::line_measures::metric_spaces::Geodesic;
use geo::algorithm::line_measures::Distance;
use geo::Point;

use crate::coordinate::Coordinate;

/// A WGS-84 ellipsoidal distance routine.
pub trait GeodesicCalculator {
    /// Geodesic distance in meters between two lat/lng points.
    fn distance_m(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64;
}

/// Default calculator backed by the `geo` crate's Karney geodesic.
#[derive(Copy, Clone, Debug, Default)]
pub struct KarneyCalculator;

impl GeodesicCalculator for KarneyCalculator {
    fn distance_m(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        Geodesic.distance(Point::new(lng1, lat1), Point::new(lng2, lat2))
    }
}

/// Geodesic distance in meters between two coordinates.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    KarneyCalculator.distance_m(a.lat_f64(), a.lng_f64(), b.lat_f64(), b.lng_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::from_f64(lat, lng).unwrap()
    }

    #[test]
    fn test_zero_distance() {
        let p = coord(39.9042, 116.4074);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance(&coord(0.0, 0.0), &coord(0.0, 1.0));
        // one degree of longitude on the equator is about 111.32 km
        assert!((d - 111_319.49).abs() < 10.0, "{d}");
    }

    #[test]
    fn test_symmetry() {
        let a = coord(39.9042, 116.4074);
        let b = coord(31.2304, 121.4737);
        assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn test_beijing_shanghai() {
        // Beijing to Shanghai is roughly 1068 km
        let d = distance(&coord(39.9042, 116.4074), &coord(31.2304, 121.4737));
        assert!((1_000_000.0..1_150_000.0).contains(&d), "{d}");
    }
}
