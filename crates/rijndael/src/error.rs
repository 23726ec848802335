//! Error type for key-schedule parameter validation.

/// Errors raised by this crate.
///
/// Only key expansion can fail; every table and round operation is total.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key-schedule parameter is outside the three configurations FIPS-197 defines.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the mismatch.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
