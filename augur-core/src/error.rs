//! The error taxonomy and the mapping from service-reported code strings
//! to failures.

use std::time::Duration;

use thiserror::Error;

/// Service failure code strings, as returned on the wire.
pub mod codes {
    /// Invalid authentication key.
    pub const AUTHENTICATION_FAILED: &str = "AuthenticationFailed";
    /// A name or collection violated the service's structural constraints.
    pub const OUT_OF_RANGE_INPUT: &str = "OutOfRangeInput";
    /// The target dataset does not exist.
    pub const DATASET_NOT_FOUND: &str = "DatasetNotFound";
    /// The target dataset cannot accept the operation right now,
    /// typically because it is being deleted.
    pub const INVALID_DATASET_STATE: &str = "InvalidDatasetState";
    /// Transient failure on the service side.
    pub const SERVICE_FAILURE: &str = "ServiceFailure";
}

/// Unified error type for the augur workspace.
///
/// Covers client-side validation rejections, the failure codes reported by
/// the forecasting service, transport-level failures, and deadline expiry
/// during blocking waits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AugurError {
    /// Invalid input argument, rejected by the validation gate before any
    /// network call.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The service rejected the authentication key.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The target dataset does not exist (or no longer exists).
    #[error("dataset not found")]
    DatasetNotFound,

    /// The target dataset is not in a state that accepts the operation,
    /// typically because an asynchronous deletion is still running.
    #[error("dataset is in an invalid state for this operation")]
    InvalidDatasetState,

    /// Transient failure reported by the service.
    #[error("transient service failure")]
    ServiceFailure,

    /// The service returned a code this client does not recognize.
    #[error("unknown service error code: {code}")]
    UnknownService {
        /// The unrecognized code, verbatim.
        code: String,
    },

    /// Connection-level failure raised by the transport implementation,
    /// distinct from any service-reported code.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The configured wait deadline elapsed during a blocking wait.
    #[error("wait cancelled after {waited:?}")]
    Cancelled {
        /// How long the operation waited before giving up.
        waited: Duration,
    },
}

impl AugurError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Transport` error from any message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether retrying the operation later can reasonably succeed.
    ///
    /// This layer never retries on its own; the flag exists so callers can
    /// implement their own policy.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::InvalidDatasetState | Self::ServiceFailure | Self::Transport(_)
        )
    }
}

/// Map a service-reported error code to a failure.
///
/// An absent or empty code means the call succeeded. The five documented
/// codes map to their taxonomy variant; anything else surfaces as
/// [`AugurError::UnknownService`] rather than being ignored.
///
/// `OutOfRangeInput` maps to [`AugurError::InvalidArg`]: the validation
/// gate should have rejected the input first, so seeing it here means the
/// gate and the service disagree, which is worth surfacing loudly.
///
/// # Errors
/// Returns the mapped failure for any non-empty code.
pub fn check_code(code: Option<&str>) -> Result<(), AugurError> {
    match code {
        None | Some("") => Ok(()),
        Some(codes::AUTHENTICATION_FAILED) => Err(AugurError::AuthenticationFailed),
        Some(codes::DATASET_NOT_FOUND) => Err(AugurError::DatasetNotFound),
        Some(codes::INVALID_DATASET_STATE) => Err(AugurError::InvalidDatasetState),
        Some(codes::SERVICE_FAILURE) => Err(AugurError::ServiceFailure),
        Some(codes::OUT_OF_RANGE_INPUT) => Err(AugurError::InvalidArg(
            "service reported OutOfRangeInput for an input the client-side gate accepted"
                .to_string(),
        )),
        Some(other) => Err(AugurError::UnknownService {
            code: other.to_string(),
        }),
    }
}
