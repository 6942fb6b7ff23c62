//! # Authenticator Capability
//!
//! The platform credential capability modelled as an injectable trait, so
//! the ceremonies can run against a deterministic stub in tests instead of
//! real hardware.
//!
//! The invoker side of this module classifies capability-reported failures
//! into the uniform error taxonomy: cancellations and timeouts become
//! [`ClientError::Aborted`], policy refusals become
//! [`ClientError::NotAllowed`], anything else passes through.

use async_trait::async_trait;

use crate::ceremony::types::{
    AssertedCredential, AssertionRequest, CreatedCredential, CreationRequest,
};
use crate::error::{ClientError, ClientResult};

/// A failure reported by the credential capability.
///
/// `name` carries the capability's own failure label (the DOM exception
/// name on web platforms, e.g. `AbortError`); `message` is its detail text.
#[derive(Debug, Clone)]
pub struct CapabilityError {
    pub name: String,
    pub message: String,
}

impl CapabilityError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The platform credential capability.
///
/// Each ceremony performs exactly one invocation per attempt: `create` for
/// registration, `get` for login. The call suspends the attempt until the
/// authenticator completes, is cancelled, or times out; deadline handling
/// is the capability's own and surfaces as an abort.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether the credential capability exists in this execution context.
    fn is_available(&self) -> bool;

    /// Whether the context is trusted enough for credential operations
    /// (HTTPS or localhost on web platforms).
    fn is_secure_context(&self) -> bool;

    /// Create a new credential for a registration ceremony.
    async fn create_credential(
        &self,
        request: &CreationRequest,
    ) -> Result<CreatedCredential, CapabilityError>;

    /// Produce an assertion over an existing credential for a login
    /// ceremony.
    async fn get_assertion(
        &self,
        request: &AssertionRequest,
    ) -> Result<AssertedCredential, CapabilityError>;
}

#[async_trait]
impl<A: Authenticator + ?Sized> Authenticator for std::sync::Arc<A> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn is_secure_context(&self) -> bool {
        (**self).is_secure_context()
    }

    async fn create_credential(
        &self,
        request: &CreationRequest,
    ) -> Result<CreatedCredential, CapabilityError> {
        (**self).create_credential(request).await
    }

    async fn get_assertion(
        &self,
        request: &AssertionRequest,
    ) -> Result<AssertedCredential, CapabilityError> {
        (**self).get_assertion(request).await
    }
}

/// Fatal preflight: no ceremony can proceed without the capability and a
/// secure context. Distinct from per-attempt authenticator failures.
pub(crate) fn ensure_supported<A: Authenticator>(authenticator: &A) -> ClientResult<()> {
    if !authenticator.is_available() {
        return Err(ClientError::Unsupported(
            "the credential capability is not available in this context".to_string(),
        ));
    }
    if !authenticator.is_secure_context() {
        return Err(ClientError::Unsupported(
            "a secure context (HTTPS or localhost) is required".to_string(),
        ));
    }
    Ok(())
}

/// Map a capability-reported failure onto the error taxonomy.
pub(crate) fn classify(failure: CapabilityError) -> ClientError {
    match failure.name.as_str() {
        "AbortError" => ClientError::Aborted,
        "NotAllowedError" => ClientError::NotAllowed,
        _ => ClientError::Authenticator(failure.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_abort() {
        let err = classify(CapabilityError::new("AbortError", "user gave up"));
        assert!(matches!(err, ClientError::Aborted));
    }

    #[test]
    fn classifies_refusal() {
        let err = classify(CapabilityError::new("NotAllowedError", "no UV"));
        assert!(matches!(err, ClientError::NotAllowed));
    }

    #[test]
    fn passes_other_failures_through() {
        let err = classify(CapabilityError::new("InvalidStateError", "already registered"));
        match err {
            ClientError::Authenticator(message) => assert_eq!(message, "already registered"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }
}
