//! Deterministic stand-ins for the three injected collaborators: a scripted
//! server transport, a scripted authenticator, and a recording reporter.
//!
//! Responses are scripted per call via `Mutex<Option<..>>` and taken once;
//! an unscripted call panics, which doubles as an assertion that a failed
//! step really short-circuits the rest of the attempt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use passkey_client::authenticator::{Authenticator, CapabilityError};
use passkey_client::ceremony::types::{
    AssertedCredential, AssertionRequest, CreatedCredential, CreationRequest, LoginBeginRequest,
    LoginChallenge, LoginConfirmation, LoginOutcome, RegistrationBeginRequest,
    RegistrationChallenge, RegistrationConfirmation, RegistrationOutcome,
};
use passkey_client::error::ClientResult;
use passkey_client::reporter::StatusReporter;
use passkey_client::transport::ServerTransport;

#[derive(Default)]
pub struct ScriptedTransport {
    pub registration_challenge: Mutex<Option<ClientResult<RegistrationChallenge>>>,
    pub registration_confirmation: Mutex<Option<ClientResult<RegistrationConfirmation>>>,
    pub login_challenge: Mutex<Option<ClientResult<LoginChallenge>>>,
    pub login_confirmation: Mutex<Option<ClientResult<LoginConfirmation>>>,

    pub register_begin_calls: AtomicUsize,
    pub register_finish_calls: AtomicUsize,
    pub login_begin_calls: AtomicUsize,
    pub login_finish_calls: AtomicUsize,

    pub sent_registration_outcome: Mutex<Option<RegistrationOutcome>>,
    pub sent_login_outcome: Mutex<Option<LoginOutcome>>,
}

#[async_trait]
impl ServerTransport for ScriptedTransport {
    async fn register_begin(
        &self,
        _request: &RegistrationBeginRequest,
    ) -> ClientResult<RegistrationChallenge> {
        self.register_begin_calls.fetch_add(1, Ordering::SeqCst);
        self.registration_challenge
            .lock()
            .unwrap()
            .take()
            .expect("unexpected call to /register/begin")
    }

    async fn register_finish(
        &self,
        outcome: &RegistrationOutcome,
    ) -> ClientResult<RegistrationConfirmation> {
        self.register_finish_calls.fetch_add(1, Ordering::SeqCst);
        *self.sent_registration_outcome.lock().unwrap() = Some(outcome.clone());
        self.registration_confirmation
            .lock()
            .unwrap()
            .take()
            .expect("unexpected call to /register/finish")
    }

    async fn login_begin(&self, _request: &LoginBeginRequest) -> ClientResult<LoginChallenge> {
        self.login_begin_calls.fetch_add(1, Ordering::SeqCst);
        self.login_challenge
            .lock()
            .unwrap()
            .take()
            .expect("unexpected call to /login/begin")
    }

    async fn login_finish(&self, outcome: &LoginOutcome) -> ClientResult<LoginConfirmation> {
        self.login_finish_calls.fetch_add(1, Ordering::SeqCst);
        *self.sent_login_outcome.lock().unwrap() = Some(outcome.clone());
        self.login_confirmation
            .lock()
            .unwrap()
            .take()
            .expect("unexpected call to /login/finish")
    }
}

pub struct ScriptedAuthenticator {
    pub available: bool,
    pub secure_context: bool,

    pub creation: Mutex<Option<Result<CreatedCredential, CapabilityError>>>,
    pub assertion: Mutex<Option<Result<AssertedCredential, CapabilityError>>>,

    pub create_calls: AtomicUsize,
    pub get_calls: AtomicUsize,

    pub seen_creation_request: Mutex<Option<CreationRequest>>,
    pub seen_assertion_request: Mutex<Option<AssertionRequest>>,
}

impl ScriptedAuthenticator {
    pub fn supported() -> Self {
        Self {
            available: true,
            secure_context: true,
            creation: Mutex::new(None),
            assertion: Mutex::new(None),
            create_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            seen_creation_request: Mutex::new(None),
            seen_assertion_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Authenticator for ScriptedAuthenticator {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_secure_context(&self) -> bool {
        self.secure_context
    }

    async fn create_credential(
        &self,
        request: &CreationRequest,
    ) -> Result<CreatedCredential, CapabilityError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_creation_request.lock().unwrap() = Some(request.clone());
        self.creation
            .lock()
            .unwrap()
            .take()
            .expect("unexpected authenticator create invocation")
    }

    async fn get_assertion(
        &self,
        request: &AssertionRequest,
    ) -> Result<AssertedCredential, CapabilityError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_assertion_request.lock().unwrap() = Some(request.clone());
        self.assertion
            .lock()
            .unwrap()
            .take()
            .expect("unexpected authenticator get invocation")
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Mutex<Vec<String>>,
    pub status: Mutex<Option<(String, bool)>>,
}

impl RecordingReporter {
    pub fn log_contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.contains(needle))
    }

    pub fn last_status(&self) -> Option<(String, bool)> {
        self.status.lock().unwrap().clone()
    }
}

impl StatusReporter for RecordingReporter {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn set_status(&self, line: &str, is_error: bool) {
        *self.status.lock().unwrap() = Some((line.to_string(), is_error));
    }
}
