//! # Passkey Ceremony Client
//!
//! Client-side orchestration of the two WebAuthn ceremonies (credential
//! registration and credential-based login) against a server that issues
//! one-time challenges and verifies signed responses.
//!
//! ## Key Concepts
//! - **Ceremony**: one complete begin → authenticator → finish exchange
//! - **Challenge**: server-issued random value the authenticator signs over
//! - **Attestation / Assertion**: authenticator proof at registration /
//!   login respectively
//!
//! The crate owns the protocol plumbing only: converting challenge
//! descriptors between their URL-safe text encoding and the binary form the
//! authenticator takes, invoking the capability, and conducting the
//! two-phase handshake. The server, the authenticator, and whatever renders
//! status output are injected collaborators.
//!
//! ```no_run
//! use passkey_client::{
//!     ceremony::CeremonyClient, config::Config, reporter::TracingReporter,
//!     transport::HttpTransport,
//! };
//! # use passkey_client::authenticator::Authenticator;
//! # async fn demo(platform: impl Authenticator) -> passkey_client::ClientResult<()> {
//! let config = Config::from_env()?;
//! let client = CeremonyClient::new(
//!     HttpTransport::new(&config)?,
//!     platform,
//!     TracingReporter,
//! )?;
//! let confirmation = client.register("alice", "alice@example.com").await?;
//! println!("registered with {}", confirmation.authenticator_name);
//! # Ok(())
//! # }
//! ```

pub mod authenticator; // The platform credential capability, as a trait
pub mod ceremony; // Registration/login orchestration and wire types
pub mod codec; // URL-safe unpadded base64 in both directions
pub mod config; // Environment-driven configuration
pub mod error; // The shared error taxonomy
pub mod reporter; // Collaborator-facing status/log sink
pub mod transport; // The begin/finish HTTP surface

pub use ceremony::CeremonyClient;
pub use error::{ClientError, ClientResult};
