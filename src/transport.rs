//! # Server Transport
//!
//! The begin/finish HTTP surface of the ceremony server, behind a trait so
//! integration tests can swap in an in-memory stub.
//!
//! All four endpoints take and return JSON. Any non-2xx status terminates
//! the attempt with [`ClientError::Server`], carrying the status and
//! whatever body the server sent as detail.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::ceremony::types::{
    LoginBeginRequest, LoginChallenge, LoginConfirmation, LoginOutcome,
    RegistrationBeginRequest, RegistrationChallenge, RegistrationConfirmation,
    RegistrationOutcome,
};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// The two-phase endpoints of the ceremony server.
#[async_trait]
pub trait ServerTransport: Send + Sync {
    async fn register_begin(
        &self,
        request: &RegistrationBeginRequest,
    ) -> ClientResult<RegistrationChallenge>;

    async fn register_finish(
        &self,
        outcome: &RegistrationOutcome,
    ) -> ClientResult<RegistrationConfirmation>;

    async fn login_begin(&self, request: &LoginBeginRequest) -> ClientResult<LoginChallenge>;

    async fn login_finish(&self, outcome: &LoginOutcome) -> ClientResult<LoginConfirmation>;
}

// Shared handles work anywhere an owned transport does; tests rely on this
// to keep a view into the stub the client owns.
#[async_trait]
impl<T: ServerTransport + ?Sized> ServerTransport for std::sync::Arc<T> {
    async fn register_begin(
        &self,
        request: &RegistrationBeginRequest,
    ) -> ClientResult<RegistrationChallenge> {
        (**self).register_begin(request).await
    }

    async fn register_finish(
        &self,
        outcome: &RegistrationOutcome,
    ) -> ClientResult<RegistrationConfirmation> {
        (**self).register_finish(outcome).await
    }

    async fn login_begin(&self, request: &LoginBeginRequest) -> ClientResult<LoginChallenge> {
        (**self).login_begin(request).await
    }

    async fn login_finish(&self, outcome: &LoginOutcome) -> ClientResult<LoginConfirmation> {
        (**self).login_finish(outcome).await
    }
}

/// reqwest-backed transport posting JSON to the configured server.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "posting ceremony request");

        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Include the body as detail; the server puts the reason there
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ServerTransport for HttpTransport {
    async fn register_begin(
        &self,
        request: &RegistrationBeginRequest,
    ) -> ClientResult<RegistrationChallenge> {
        self.post_json("/register/begin", request).await
    }

    async fn register_finish(
        &self,
        outcome: &RegistrationOutcome,
    ) -> ClientResult<RegistrationConfirmation> {
        self.post_json("/register/finish", outcome).await
    }

    async fn login_begin(&self, request: &LoginBeginRequest) -> ClientResult<LoginChallenge> {
        self.post_json("/login/begin", request).await
    }

    async fn login_finish(&self, outcome: &LoginOutcome) -> ClientResult<LoginConfirmation> {
        self.post_json("/login/finish", outcome).await
    }
}
