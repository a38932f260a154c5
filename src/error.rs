#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the search bounds are empty, mismatched, or degenerate.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Returned when an optimizer setting is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Returned when an observation would break the history invariants
    /// (non-finite score, wrong length, or a point outside the bounds).
    #[error("invalid observation: {0}")]
    InvalidObservation(String),

    /// Returned when a ranked split is requested with `k` outside `[1, size - 1]`.
    #[error("insufficient history: cannot split {size} observations with k = {k}")]
    InsufficientHistory {
        /// The requested number of good observations.
        k: usize,
        /// The number of observations in the history.
        size: usize,
    },

    /// Returned when requesting the best observation of an empty history.
    #[error("no observations available")]
    NoObservations,

    /// Returned when the user objective fails. Carries the objective's own
    /// error message unchanged.
    #[error("objective failed: {0}")]
    ObjectiveFailure(String),

    /// Returned when stepping an optimizer whose run already failed.
    #[error("run was aborted by an earlier evaluation failure")]
    Aborted,

    /// Returned when bandwidth is not positive and finite.
    #[error("invalid bandwidth: {0} must be positive")]
    InvalidBandwidth(f64),

    /// Returned when a KDE is created with no points.
    #[error("KDE requires at least one sample")]
    EmptySamples,

    /// Returned when KDE points have inconsistent dimensions.
    #[error(
        "dimension mismatch: expected {expected} dimensions but sample {sample_index} has {got}"
    )]
    DimensionMismatch {
        /// The expected number of dimensions.
        expected: usize,
        /// The actual number of dimensions in the sample.
        got: usize,
        /// The index of the sample with mismatched dimensions.
        sample_index: usize,
    },

    /// Returned when bandwidth vector length doesn't match the number of dimensions.
    #[error("bandwidth dimension mismatch: expected {expected} bandwidths but got {got}")]
    BandwidthDimensionMismatch {
        /// The expected number of bandwidths.
        expected: usize,
        /// The actual number of bandwidths provided.
        got: usize,
    },
}

/// A convenience alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
