//! Error types for version resolution.

use thiserror::Error;

/// Errors that can occur while resolving the host's version.
///
/// A catalog miss is not an error: the resolver falls back to a synthetic
/// entry instead. These variants only cover input that cannot be turned into
/// a numeric triple at all.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The host descriptor does not contain the delimited version token.
    #[error("no version token between `{label}` and `{terminator}` in host descriptor `{descriptor}`")]
    MissingVersionToken {
        /// The raw descriptor reported by the host.
        descriptor: String,
        /// Leading label that was searched for.
        label: String,
        /// Delimiter expected after the token.
        terminator: String,
    },

    /// A component expected to be a non-negative integer is not.
    #[error("invalid numeric component `{component}` in `{input}`")]
    InvalidComponent {
        /// The full string that was being parsed.
        input: String,
        /// The offending component.
        component: String,
    },
}

impl ResolveError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use server_version::ResolveError;
    ///
    /// let error = ResolveError::InvalidComponent {
    ///     input: "1.x".to_string(),
    ///     component: "x".to_string(),
    /// };
    /// assert_eq!(error.description(), "Invalid numeric version component");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingVersionToken { .. } => "Host descriptor has no version token",
            Self::InvalidComponent { .. } => "Invalid numeric version component",
        }
    }
}
