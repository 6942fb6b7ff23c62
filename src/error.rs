//! # Error Handling
//!
//! This module defines the error type shared by every ceremony step and
//! converts underlying failures (encoding, HTTP, authenticator) into it.
//!
//! Every error raised inside an attempt terminates that attempt: the
//! orchestrator catches it once at the boundary, surfaces a single
//! human-readable message to the reporter, and returns it to the caller.
//! Nothing is retried automatically; a retry is a fresh attempt.

use thiserror::Error;

/// All the ways a ceremony attempt can fail.
///
/// ## The `#[derive(Error)]` macro
/// The `thiserror::Error` derive implements `std::error::Error` and
/// `Display` (from the `#[error(...)]` messages), and `#[from]` variants
/// convert automatically under the `?` operator.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Bad local input: identity fields at attempt start, or configuration
    /// values at load time. Raised before any network call; never sent over
    /// the wire.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed or missing byte-text encoding, either in a server-issued
    /// challenge descriptor or while building the authenticator request.
    ///
    /// An absent byte field and a malformed one share this variant: both
    /// mean the descriptor cannot be turned into a binary request.
    #[error("Encoding error: {0}")]
    Format(String),

    /// Non-2xx response from a begin or finish endpoint. `body` is the
    /// response text when one was readable, otherwise empty.
    #[error("Server error: {status}: {body}")]
    Server { status: u16, body: String },

    /// The authenticator reported a user or timeout cancellation.
    #[error("WebAuthn operation was aborted by the user or timed out")]
    Aborted,

    /// The authenticator refused the operation.
    #[error("WebAuthn operation not allowed. This might be due to security restrictions, lack of user verification, or user cancellation")]
    NotAllowed,

    /// Any other authenticator-reported failure, passed through unchanged.
    #[error("Authenticator error: {0}")]
    Authenticator(String),

    /// The credential capability or a secure context is missing. Fatal:
    /// checked once at client construction, no ceremony can proceed.
    #[error("WebAuthn is not supported here: {0}")]
    Unsupported(String),

    /// A ceremony attempt is already in flight; new start signals are
    /// rejected, not queued.
    #[error("Another ceremony attempt is already in progress")]
    Busy,

    /// Transport-level HTTP failure (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure on a request or response body.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias: `ClientResult<T>` instead of `Result<T, ClientError>`.
pub type ClientResult<T> = Result<T, ClientError>;
