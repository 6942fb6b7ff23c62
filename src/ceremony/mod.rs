//! # Ceremony Orchestration
//!
//! This module drives the two WebAuthn ceremonies against a begin/finish
//! server.
//!
//! ## Ceremony Flow Overview
//!
//! ### Registration (creating a credential)
//! 1. Validate identity input, POST it to `/register/begin`
//! 2. Decode the returned challenge descriptor into a binary request
//! 3. Invoke the authenticator's `create` operation
//! 4. Re-encode the attestation result and POST it to `/register/finish`
//! 5. Surface the server's confirmation (authenticator name)
//!
//! ### Login (asserting an existing credential)
//! Same shape with `/login/begin`, the `get` operation, and
//! `/login/finish`; the confirmation carries the username.
//!
//! Each attempt is one linear chain of fallible steps; the first failure
//! short-circuits the rest, is reported once, and ends the attempt. A new
//! attempt needs a fresh start signal and a fresh challenge.

pub mod authentication;
pub mod registration;
pub mod types;

use tokio::sync::Mutex;

use crate::authenticator::{self, Authenticator};
use crate::error::{ClientError, ClientResult};
use crate::reporter::StatusReporter;
use crate::transport::ServerTransport;

/// Client-side orchestrator for registration and login ceremonies.
///
/// Generic over its three collaborators so each can be replaced by a
/// deterministic stub in tests: the server transport, the platform
/// authenticator, and the progress reporter.
pub struct CeremonyClient<T, A, R> {
    pub(crate) transport: T,
    pub(crate) authenticator: A,
    pub(crate) reporter: R,
    /// Single-attempt guard: a second start signal while an attempt is in
    /// flight is rejected, not queued.
    pub(crate) attempt: Mutex<()>,
}

impl<T, A, R> CeremonyClient<T, A, R>
where
    T: ServerTransport,
    A: Authenticator,
    R: StatusReporter,
{
    /// Build a client, checking once that the credential capability exists
    /// and the context is secure. Failing either is fatal: no ceremony can
    /// ever proceed, so construction refuses with
    /// [`ClientError::Unsupported`].
    pub fn new(transport: T, authenticator: A, reporter: R) -> ClientResult<Self> {
        authenticator::ensure_supported(&authenticator)?;

        Ok(Self {
            transport,
            authenticator,
            reporter,
            attempt: Mutex::new(()),
        })
    }

    /// Log a progress line and mirror it into the status display.
    pub(crate) fn progress(&self, message: &str) {
        self.reporter.log(message);
        self.reporter.set_status(message, false);
    }

    /// Report a terminal failure once at the attempt boundary, keeping the
    /// original cause in the diagnostic log.
    pub(crate) fn report_failure(&self, error: &ClientError) {
        let message = format!("Error: {error}");
        self.reporter.log(&message);
        self.reporter.set_status(&message, true);
        tracing::error!(cause = ?error, "ceremony attempt failed");
    }
}

/// Registration requires a username and an "@"-shaped email; checked before
/// any network call.
pub(crate) fn validate_registration_input(username: &str, email: &str) -> ClientResult<()> {
    if username.trim().is_empty() {
        return Err(ClientError::Validation(
            "Username is required for registration".to_string(),
        ));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ClientError::Validation(
            "A valid email address is required for registration".to_string(),
        ));
    }
    Ok(())
}

/// Login only needs the account email.
pub(crate) fn validate_login_input(email: &str) -> ClientResult<()> {
    if email.trim().is_empty() {
        return Err(ClientError::Validation(
            "Email is required for login".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_input_requires_username() {
        assert!(matches!(
            validate_registration_input("", "a@b"),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            validate_registration_input("   ", "a@b"),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn registration_input_requires_at_shaped_email() {
        assert!(matches!(
            validate_registration_input("alice", "not-an-address"),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            validate_registration_input("alice", ""),
            Err(ClientError::Validation(_))
        ));
        assert!(validate_registration_input("alice", "alice@example.com").is_ok());
    }

    #[test]
    fn login_input_requires_email() {
        assert!(matches!(
            validate_login_input(""),
            Err(ClientError::Validation(_))
        ));
        assert!(validate_login_input("alice@example.com").is_ok());
    }
}
