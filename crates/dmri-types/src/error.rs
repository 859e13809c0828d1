use thiserror::Error;

#[derive(Error, Debug)]
pub enum DmriError {
    #[error("vector shape mismatch: left operand has {left} components, right has {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("cannot normalise a zero-length vector")]
    DivideByZero,

    #[error("voxel index out of range: ({ix}, {iy}, {iz}) for grid of shape {shape:?}")]
    OutOfRange {
        ix: isize,
        iy: isize,
        iz: isize,
        shape: [usize; 3],
    },

    #[error("invalid grid shape: {0}")]
    InvalidShape(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DmriResult<T> = Result<T, DmriError>;
