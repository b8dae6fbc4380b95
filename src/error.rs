use thiserror::Error;

/// Errors raised while building a playfield or loading its configuration.
///
/// Geometry itself never fails: degenerate cases resolve to "no hit".
#[derive(Debug, Error)]
pub enum PlayfieldError {
    #[error("obstacle needs 2 (segment) or 3 (curve) points, got {count}")]
    InvalidArity { count: usize },

    #[error("obstacle {index}: {source}")]
    Obstacle {
        index: usize,
        #[source]
        source: Box<PlayfieldError>,
    },

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`PlayfieldError`].
pub type Result<T> = std::result::Result<T, PlayfieldError>;
