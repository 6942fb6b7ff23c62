use crate::authenticator::{self, Authenticator};
use crate::codec;
use crate::error::{ClientError, ClientResult};
use crate::reporter::StatusReporter;
use crate::transport::ServerTransport;

use super::registration::trace_client_data;
use super::types::{
    AllowedCredential, AssertedCredential, AssertionRequest, LoginBeginRequest, LoginChallenge,
    LoginConfirmation, LoginOutcome,
};
use super::CeremonyClient;

/// Turn a server-issued login descriptor into the binary assertion request.
///
/// An absent `allowCredentials` list stays absent; an empty list would
/// tell the authenticator something different. Entry order and per-entry
/// pass-through fields are preserved.
pub fn build_assertion_request(descriptor: LoginChallenge) -> ClientResult<AssertionRequest> {
    let challenge = descriptor
        .challenge
        .ok_or_else(|| ClientError::Format("login options carry no challenge".to_string()))?;

    let allow_credentials = descriptor
        .allow_credentials
        .map(|entries| {
            entries
                .into_iter()
                .map(|entry| {
                    let id = entry.id.ok_or_else(|| {
                        ClientError::Format("allowed credential carries no id".to_string())
                    })?;
                    Ok(AllowedCredential {
                        id: codec::decode(&id)?,
                        extra: entry.extra,
                    })
                })
                .collect::<ClientResult<Vec<_>>>()
        })
        .transpose()?;

    Ok(AssertionRequest {
        challenge: codec::decode(&challenge)?,
        allow_credentials,
        extra: descriptor.extra,
    })
}

/// Re-encode the authenticator's assertion result for transport. The user
/// handle is encoded only when the authenticator disclosed one.
pub fn login_outcome(credential: &AssertedCredential) -> LoginOutcome {
    LoginOutcome {
        id: credential.id.clone(),
        authenticator_data: codec::encode(&credential.authenticator_data),
        client_data_json: codec::encode(&credential.client_data_json),
        signature: codec::encode(&credential.signature),
        user_handle: credential.user_handle.as_deref().map(codec::encode),
    }
}

impl<T, A, R> CeremonyClient<T, A, R>
where
    T: ServerTransport,
    A: Authenticator,
    R: StatusReporter,
{
    /// Run a complete login ceremony for the given account email.
    pub async fn login(&self, email: &str) -> ClientResult<LoginConfirmation> {
        let result = self.try_login(email).await;
        if let Err(error) = &result {
            self.report_failure(error);
        }
        result
    }

    async fn try_login(&self, email: &str) -> ClientResult<LoginConfirmation> {
        let _attempt = self.attempt.try_lock().map_err(|_| ClientError::Busy)?;

        self.progress("Starting login...");
        super::validate_login_input(email)?;

        let begin = LoginBeginRequest {
            email: email.to_string(),
        };
        let descriptor = self.transport.login_begin(&begin).await?;
        self.progress("Received login options from server");

        let request = build_assertion_request(descriptor)?;

        self.progress("Getting credential - please follow your authenticator prompts");
        let credential = self
            .authenticator
            .get_assertion(&request)
            .await
            .map_err(authenticator::classify)?;

        let outcome = login_outcome(&credential);
        trace_client_data(&credential.client_data_json);

        self.progress("Credential verified. Sending to server...");
        let confirmation = self.transport.login_finish(&outcome).await?;

        self.progress(&format!("Login successful! Welcome, {}", confirmation.username));

        Ok(confirmation)
    }
}
