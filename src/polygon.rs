//! Geodesic aggregates over closed rings of coordinates: perimeter,
//! spherical-excess area and boundary-inclusive point-in-polygon.
//!
//! Callers supply any ordered slice of vertices; rings are auto-closed
//! on a defensive copy, the input is never mutated. Edge lengths come
//! back from the geodesic seam as `f64` and are summed in the
//! aggregate's decimal context; the ray cast runs on an `f64` copy of
//! the remapped coordinates, where its epsilon tolerances live.

use bigdecimal::{BigDecimal, Zero};
use itertools::Itertools;
use log::trace;

use crate::constants::MEAN_EARTH_RADIUS;
use crate::coordinate::Coordinate;
use crate::error::GeoError;
use crate::geodesy::{GeodesicCalculator, KarneyCalculator};
use crate::numeric::{dec_from_f64, DecimalContext, PRECISION_DIGITS};

const CTX: DecimalContext = DecimalContext::new(PRECISION_DIGITS);

const MIN_RING_VERTICES: usize = 3;

/// On-edge test tolerance for the cross product, in squared degrees.
const ON_EDGE_EPS: f64 = 1e-9;
/// Below this squared length an edge is treated as a single vertex.
const DEGENERATE_EDGE_EPS: f64 = 1e-12;
/// Edges with a smaller latitude span are skipped by the ray cast; the
/// crossing division would be unstable on them.
const FLAT_EDGE_EPS: f64 = 1e-12;

/// Validates the ring and returns a closed defensive copy: the first
/// vertex is appended when the caller left the ring open. Closure is
/// decided by exact decimal equality, not a floating tolerance.
fn closed_ring(points: &[Coordinate]) -> Result<Vec<Coordinate>, GeoError> {
    if points.len() < MIN_RING_VERTICES {
        return Err(GeoError::InsufficientVertices {
            required: MIN_RING_VERTICES,
            actual: points.len(),
        });
    }

    let mut ring = points.to_vec();
    if ring[0] != ring[ring.len() - 1] {
        let first = ring[0].clone();
        ring.push(first);
    }
    Ok(ring)
}

/// Sum of the geodesic edge lengths around the closed ring, in meters.
pub fn perimeter(points: &[Coordinate]) -> Result<BigDecimal, GeoError> {
    perimeter_with(&KarneyCalculator, points)
}

/// [`perimeter`] with a caller-supplied geodesic routine.
pub fn perimeter_with(
    calc: &impl GeodesicCalculator,
    points: &[Coordinate],
) -> Result<BigDecimal, GeoError> {
    let ring = closed_ring(points)?;

    let mut total = BigDecimal::zero();
    for (a, b) in ring.iter().tuple_windows() {
        total += dec_from_f64(calc.distance_m(a.lat_f64(), a.lng_f64(), b.lat_f64(), b.lng_f64()));
    }

    Ok(CTX.round(total))
}

/// Polygon area in square meters, always non-negative.
///
/// The ring is fan-triangulated from vertex 0 and each triangle's area
/// is obtained from its spherical excess on a sphere of mean earth
/// radius. This is a spherical approximation of the true ellipsoidal
/// area; the error is below 0.1% for typical map-scale polygons.
/// Winding direction does not affect the result.
pub fn area(points: &[Coordinate]) -> Result<BigDecimal, GeoError> {
    area_with(&KarneyCalculator, points)
}

/// [`area`] with a caller-supplied geodesic routine.
pub fn area_with(
    calc: &impl GeodesicCalculator,
    points: &[Coordinate],
) -> Result<BigDecimal, GeoError> {
    let ring = closed_ring(points)?;
    let origin = &ring[0];

    let mut total = BigDecimal::zero();
    for (p, q) in ring[1..ring.len() - 1].iter().tuple_windows() {
        total += dec_from_f64(triangle_area(calc, origin, p, q));
    }

    Ok(CTX.round(total.abs()))
}

/// Spherical triangle area via L'Huilier's excess formula:
/// `tan²(E/4) = tan(s/2)·tan((s-a)/2)·tan((s-b)/2)·tan((s-c)/2)`.
///
/// Degenerate triangles (a side at least as long as the half perimeter,
/// or a non-positive tangent product) contribute zero area instead of
/// propagating NaN; they are an expected byproduct of triangulating
/// near-collinear or repeated vertices.
fn triangle_area(
    calc: &impl GeodesicCalculator,
    o: &Coordinate,
    p: &Coordinate,
    q: &Coordinate,
) -> f64 {
    let a = calc.distance_m(o.lat_f64(), o.lng_f64(), p.lat_f64(), p.lng_f64()) / MEAN_EARTH_RADIUS;
    let b = calc.distance_m(p.lat_f64(), p.lng_f64(), q.lat_f64(), q.lng_f64()) / MEAN_EARTH_RADIUS;
    let c = calc.distance_m(q.lat_f64(), q.lng_f64(), o.lat_f64(), o.lng_f64()) / MEAN_EARTH_RADIUS;

    let s = (a + b + c) / 2.0;
    if s <= a || s <= b || s <= c {
        trace!("collapsed triangle skipped in area sum");
        return 0.0;
    }

    let t = (s / 2.0).tan()
        * ((s - a) / 2.0).tan()
        * ((s - b) / 2.0).tan()
        * ((s - c) / 2.0).tan();
    if t <= 0.0 {
        trace!("non-positive excess product, triangle skipped in area sum");
        return 0.0;
    }

    let excess = 4.0 * t.sqrt().atan();
    excess * MEAN_EARTH_RADIUS * MEAN_EARTH_RADIUS
}

/// Boundary-inclusive ray-casting membership test, safe for polygons
/// that straddle the ±180° meridian.
///
/// All longitudes are first remapped into the frame of vertex 0 so that
/// every offset lies in `[-180, 180)`; the standard parity toggle then
/// runs on the remapped coordinates.
pub fn contains(point: &Coordinate, polygon: &[Coordinate]) -> Result<bool, GeoError> {
    if polygon.len() < MIN_RING_VERTICES {
        return Err(GeoError::InsufficientVertices {
            required: MIN_RING_VERTICES,
            actual: polygon.len(),
        });
    }

    let ref_lng = polygon[0].lng_f64();
    let px = adjust_longitude(point.lng_f64(), ref_lng);
    let py = point.lat_f64();

    let ring: Vec<(f64, f64)> = polygon
        .iter()
        .map(|c| (adjust_longitude(c.lng_f64(), ref_lng), c.lat_f64()))
        .collect();

    let n = ring.len();
    let mut inside = false;

    for i in 0..n {
        let j = if i == 0 { n - 1 } else { i - 1 };
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];

        // the boundary counts as inside
        if on_segment(px, py, xi, yi, xj, yj) {
            return Ok(true);
        }

        // near-horizontal edges cannot cross the horizontal ray and
        // would destabilize the crossing division below
        if (yi - yj).abs() < FLAT_EDGE_EPS {
            continue;
        }

        let crosses = (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
    }

    Ok(inside)
}

/// True when (px, py) lies on the segment (ax, ay)-(bx, by).
fn on_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
    if cross.abs() > ON_EDGE_EPS {
        return false;
    }

    let len2 = (bx - ax) * (bx - ax) + (by - ay) * (by - ay);
    if len2 < DEGENERATE_EDGE_EPS {
        // zero-length edge: on it only when sitting on the vertex itself
        return (px - ax).abs() < ON_EDGE_EPS && (py - ay).abs() < ON_EDGE_EPS;
    }

    let dot = (px - ax) * (bx - ax) + (py - ay) * (by - ay);
    (-DEGENERATE_EDGE_EPS..=len2 + DEGENERATE_EDGE_EPS).contains(&dot)
}

/// Shifts `lng` by whole turns until its offset from `ref_lng` lies in
/// `[-180, 180)`.
fn adjust_longitude(lng: f64, ref_lng: f64) -> f64 {
    let mut lng = lng;
    while lng - ref_lng >= 180.0 {
        lng -= 360.0;
    }
    while lng - ref_lng < -180.0 {
        lng += 360.0;
    }
    lng
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::ToPrimitive;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::from_f64(lat, lng).unwrap()
    }

    fn unit_square() -> Vec<Coordinate> {
        vec![coord(0., 0.), coord(0., 1.), coord(1., 1.), coord(1., 0.)]
    }

    #[test]
    fn test_perimeter_auto_closes() {
        let open = [coord(0., 0.), coord(0., 1.), coord(1., 0.)];
        let closed = [coord(0., 0.), coord(0., 1.), coord(1., 0.), coord(0., 0.)];
        assert_eq!(perimeter(&open).unwrap(), perimeter(&closed).unwrap());
    }

    #[test]
    fn test_perimeter_unit_square() {
        // four sides of roughly one degree each, ~443 km total
        let p = perimeter(&unit_square()).unwrap().to_f64().unwrap();
        assert!((440_000.0..448_000.0).contains(&p), "{p}");
    }

    #[test]
    fn test_too_few_vertices() {
        let two = [coord(0., 0.), coord(1., 1.)];
        assert!(matches!(
            perimeter(&two),
            Err(GeoError::InsufficientVertices { required: 3, actual: 2 })
        ));
        assert!(matches!(area(&two), Err(GeoError::InsufficientVertices { .. })));
        assert!(matches!(
            contains(&coord(0., 0.), &two),
            Err(GeoError::InsufficientVertices { .. })
        ));
    }

    #[test]
    fn test_area_unit_square_at_equator() {
        // one square degree at the equator is about 1.235e10 m²
        let a = area(&unit_square()).unwrap().to_f64().unwrap();
        let expected = 1.235e10;
        assert!((a - expected).abs() / expected < 0.01, "{a}");
    }

    #[test]
    fn test_area_winding_independent() {
        let cw = [coord(0., 0.), coord(0., 1.), coord(1., 0.)];
        let ccw = [coord(0., 0.), coord(1., 0.), coord(0., 1.)];
        let a = area(&cw).unwrap().to_f64().unwrap();
        let b = area(&ccw).unwrap().to_f64().unwrap();
        assert!(a > 0.0);
        assert!((a - b).abs() / a < 1e-6, "{a} != {b}");
    }

    /// Planar stub standing in for the geodesic routine; collinear
    /// points produce exactly additive side lengths, so the degenerate
    /// branch is hit without floating slack.
    struct PlanarCalculator;

    impl GeodesicCalculator for PlanarCalculator {
        fn distance_m(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
            ((lat2 - lat1).powi(2) + (lng2 - lng1).powi(2)).sqrt() * 111_000.0
        }
    }

    #[test]
    fn test_area_degenerate_ring_is_zero() {
        // three collinear vertices enclose nothing
        let line = [coord(0., 0.), coord(0., 0.5), coord(0., 1.)];
        assert_eq!(area_with(&PlanarCalculator, &line).unwrap(), BigDecimal::zero());

        // a repeated vertex collapses its triangle the same way
        let pinched = [coord(0., 0.), coord(0., 1.), coord(0., 1.)];
        assert_eq!(area_with(&PlanarCalculator, &pinched).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn test_contains_interior_and_exterior() {
        let square = unit_square();
        assert!(contains(&coord(0.5, 0.5), &square).unwrap());
        assert!(!contains(&coord(2., 2.), &square).unwrap());
        assert!(!contains(&coord(-0.5, 0.5), &square).unwrap());
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let square = unit_square();

        // every vertex is inside
        for v in &square {
            assert!(contains(v, &square).unwrap(), "vertex {v:?}");
        }

        // every edge midpoint is inside
        let midpoints = [
            coord(0., 0.5),
            coord(0.5, 1.),
            coord(1., 0.5),
            coord(0.5, 0.),
        ];
        for m in &midpoints {
            assert!(contains(m, &square).unwrap(), "midpoint {m:?}");
        }
    }

    #[test]
    fn test_contains_across_anti_meridian() {
        let ring = [
            coord(0., 179.),
            coord(0., -179.),
            coord(1., -179.),
            coord(1., 179.),
        ];

        assert!(contains(&coord(0.5, 180.), &ring).unwrap());
        assert!(contains(&coord(0.5, -180.), &ring).unwrap());
        assert!(contains(&coord(0.5, 179.5), &ring).unwrap());
        assert!(!contains(&coord(0.5, 170.), &ring).unwrap());
        assert!(!contains(&coord(0.5, -170.), &ring).unwrap());
    }

    #[test]
    fn test_input_not_mutated() {
        let open = [coord(0., 0.), coord(0., 1.), coord(1., 0.)];
        let before = open.clone();
        let _ = perimeter(&open).unwrap();
        let _ = area(&open).unwrap();
        assert_eq!(open, before);
    }
}
