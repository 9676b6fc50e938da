use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::ValidationError;
use crate::domain::ops::Op;

/// A request that left the process but didn't produce a usable answer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered non-2xx. `message` is the `error` field of the
    /// response envelope when one could be parsed, otherwise `HTTP {status}`.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// The request never produced an HTTP response (connection refused, DNS,
    /// or a 2xx body that failed to decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Everything an operation can surface to the user. Each failure is scoped
/// to its one operation; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The same operation already has a request outstanding. The client
    /// never issues a duplicate; the user re-triggers once it resolves.
    #[error("operation already in progress: {0}")]
    Busy(Op),
}
