use bigdecimal::BigDecimal;
use thiserror::Error;

/// Errors surfaced by the coordinate and polygon operations.
///
/// Argument-kind variants cover structurally invalid input rejected at
/// the function boundary; [`GeoError::DmsFormat`] covers a present but
/// unparseable DMS string. Numerical degeneracy inside the area
/// computation is recovered locally and never surfaces here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Latitude {0} not in range -90..=90")]
    LatitudeOutOfRange(BigDecimal),

    #[error("Longitude {0} not in range -180..=180")]
    LongitudeOutOfRange(BigDecimal),

    #[error("Coordinate component {0} is not a finite number")]
    NotFinite(f64),

    #[error("Polygon needs at least {required} vertices, got {actual}")]
    InsufficientVertices { required: usize, actual: usize },

    #[error("Malformed DMS string `{0}`")]
    DmsFormat(String),
}
