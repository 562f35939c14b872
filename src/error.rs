use thiserror::Error;

/// Top-level error type for the polyform library.
#[derive(Debug, Error)]
pub enum PolyformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("coordinate list must contain an even number of values, got {0}")]
    OddCoordinateCount(usize),
}

/// Errors related to shape construction.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{shape} requires {expected} vertices, got {actual}")]
    TooFewVertices {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{shape} vertices must be two-dimensional points")]
    DimensionMismatch { shape: &'static str },
}

/// Convenience type alias for results using [`PolyformError`].
pub type Result<T> = std::result::Result<T, PolyformError>;
