//! # Registration Ceremony
//!
//! Creating a new credential is a two-phase exchange: `/register/begin`
//! hands out a challenge descriptor, the authenticator signs over it, and
//! `/register/finish` receives the re-encoded attestation.
//!
//! ## What gets transformed?
//! Only the byte-bearing leaf fields change shape on the way through:
//! - begin response → authenticator request: `challenge` and `user.id`
//!   are decoded from URL-safe base64 to raw bytes
//! - authenticator result → finish request: `attestationObject` and
//!   `clientDataJSON` are encoded back to URL-safe base64
//! Every other descriptor field passes through untouched.

use crate::authenticator::{self, Authenticator};
use crate::codec;
use crate::error::{ClientError, ClientResult};
use crate::reporter::StatusReporter;
use crate::transport::ServerTransport;

use super::types::{
    CreatedCredential, CreationRequest, RegistrationBeginRequest, RegistrationChallenge,
    RegistrationConfirmation, RegistrationOutcome, UserHandle,
};
use super::CeremonyClient;

/// Turn a server-issued registration descriptor into the binary request the
/// authenticator takes.
///
/// The descriptor is consumed; non-byte fields move over unchanged. A
/// missing or malformed `challenge` or `user.id` fails with
/// [`ClientError::Format`]: a caller-visible precondition violation, not
/// retried.
pub fn build_creation_request(descriptor: RegistrationChallenge) -> ClientResult<CreationRequest> {
    let challenge = descriptor
        .challenge
        .ok_or_else(|| ClientError::Format("registration options carry no challenge".to_string()))?;

    let user = descriptor
        .user
        .ok_or_else(|| ClientError::Format("registration options carry no user entity".to_string()))?;

    let user_id = user
        .id
        .ok_or_else(|| ClientError::Format("user entity carries no id".to_string()))?;

    Ok(CreationRequest {
        challenge: codec::decode(&challenge)?,
        user: UserHandle {
            id: codec::decode(&user_id)?,
            extra: user.extra,
        },
        extra: descriptor.extra,
    })
}

/// Re-encode the authenticator's attestation result for transport.
///
/// Pure structural transform: no validation of content happens here. The
/// credential id is already capability-native text and passes through.
pub fn registration_outcome(credential: &CreatedCredential) -> RegistrationOutcome {
    RegistrationOutcome {
        id: credential.id.clone(),
        attestation_object: codec::encode(&credential.attestation_object),
        client_data_json: codec::encode(&credential.client_data_json),
    }
}

impl<T, A, R> CeremonyClient<T, A, R>
where
    T: ServerTransport,
    A: Authenticator,
    R: StatusReporter,
{
    /// Run a complete registration ceremony for the given identity.
    ///
    /// On success the server's confirmation (authenticator name, optional
    /// AAGUID) is surfaced through the reporter and returned. On failure
    /// the attempt ends with a single reported error; nothing is retried.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
    ) -> ClientResult<RegistrationConfirmation> {
        let result = self.try_register(username, email).await;
        if let Err(error) = &result {
            self.report_failure(error);
        }
        result
    }

    async fn try_register(
        &self,
        username: &str,
        email: &str,
    ) -> ClientResult<RegistrationConfirmation> {
        let _attempt = self.attempt.try_lock().map_err(|_| ClientError::Busy)?;

        self.progress("Starting registration...");
        super::validate_registration_input(username, email)?;

        let begin = RegistrationBeginRequest {
            username: username.to_string(),
            email: email.to_string(),
        };
        let descriptor = self.transport.register_begin(&begin).await?;
        self.progress("Received registration options from server");

        let request = build_creation_request(descriptor)?;

        self.progress("Creating credential - please follow your authenticator prompts");
        let credential = self
            .authenticator
            .create_credential(&request)
            .await
            .map_err(authenticator::classify)?;

        let outcome = registration_outcome(&credential);
        trace_client_data(&credential.client_data_json);

        self.progress("Credential created. Sending to server...");
        let confirmation = self.transport.register_finish(&outcome).await?;

        self.progress(&format!(
            "Registration successful! Authenticator: {}",
            confirmation.authenticator_name
        ));
        if let Some(aaguid) = &confirmation.aaguid {
            self.reporter.log(&format!(
                "AAGUID: {aaguid} (Name: {})",
                confirmation.authenticator_name
            ));
        }

        Ok(confirmation)
    }
}

/// Debug-trace the decoded clientDataJSON record (challenge/origin/type).
pub(crate) fn trace_client_data(client_data_json: &[u8]) {
    if let Ok(client_data) = serde_json::from_slice::<serde_json::Value>(client_data_json) {
        tracing::debug!(%client_data, "decoded clientDataJSON");
    }
}
