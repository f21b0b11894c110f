//! View rendering errors.

/// Error returned when page rendering fails.
///
/// All variants are user-visible and non-fatal: the adapter shows the
/// localized message (see [`crate::locale`]) in the error region and the
/// pipeline still reaches its ready state.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A required URL query parameter is absent (or empty) for the current
    /// page kind.
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),
    /// The requested grade key does not exist in the roster.
    #[error("grade not found: {0}")]
    GradeNotFound(String),
    /// The grade exists but the requested group id does not.
    #[error("group not found in grade {grade}: {id}")]
    GroupNotFound {
        /// The resolved grade key.
        grade: String,
        /// The missing group id.
        id: String,
    },
    /// The page marker does not match any known page kind.
    #[error("unsupported page marker: {0}")]
    UnsupportedPage(String),
}
