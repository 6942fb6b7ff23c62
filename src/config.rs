//! # Configuration Management
//!
//! This module handles loading configuration from environment variables,
//! with a `.env` file picked up for local development.
//!
//! ## Environment Variables
//! - `SERVER_URL`: base URL of the WebAuthn server (default: http://localhost:8080)
//! - `REQUEST_TIMEOUT_SECS`: per-request HTTP timeout in seconds (default: 30)

use std::env;

use crate::error::{ClientError, ClientResult};

/// Client configuration.
///
/// The server is expected to expose the four ceremony endpoints
/// (`/register/begin`, `/register/finish`, `/login/begin`, `/login/finish`)
/// under `server_url`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ceremony server, without a trailing path.
    pub server_url: String,

    /// Timeout applied to each begin/finish request.
    ///
    /// This bounds the network calls only; the authenticator step carries
    /// its own deadline semantics, surfaced as an abort.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> ClientResult<Self> {
        // Load .env if present (dotenvy doesn't error if the file is missing)
        dotenvy::dotenv().ok();

        Ok(Config {
            server_url: env::var("SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    ClientError::Validation(
                        "REQUEST_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                    )
                })?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}
