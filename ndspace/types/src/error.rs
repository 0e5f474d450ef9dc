/// Error type for the checked accessors and conversions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("expected {expected} components but found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfBounds { index: usize, dim: usize },
}
