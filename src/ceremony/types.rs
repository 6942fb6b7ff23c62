//! # Ceremony Wire & Capability Types
//!
//! Request/response types for the begin/finish endpoints, the binary forms
//! handed to the authenticator capability, and the encoded outcomes sent
//! back to the server.
//!
//! ## Why flattened maps?
//! Challenge descriptors carry fields this client never interprets
//! (timeouts, algorithm preferences, authenticator selection criteria,
//! per-credential transport hints). Instead of modelling every nested type,
//! anything that is not a byte-bearing field rides in a
//! `#[serde(flatten)]` map and passes through untouched: the authenticator
//! request must contain every field the descriptor did.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// --- Begin-phase request bodies ---

/// Body of `POST /register/begin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationBeginRequest {
    pub username: String,
    pub email: String,
}

/// Body of `POST /login/begin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginBeginRequest {
    pub email: String,
}

// --- Server-issued challenge descriptors (text-encoded byte fields) ---

/// Registration challenge descriptor as issued by `/register/begin`.
///
/// Byte-bearing fields are optional here so that "absent" and "malformed"
/// can be rejected through a single path in the request builder; a
/// descriptor is consumed exactly once per attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationChallenge {
    /// Server challenge, URL-safe base64 without padding.
    #[serde(default)]
    pub challenge: Option<String>,

    /// User entity; its `id` is text-encoded bytes, the rest passes through.
    #[serde(default)]
    pub user: Option<UserDescriptor>,

    /// Everything else (rp, pubKeyCredParams, timeout, attestation, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The user entity inside a registration descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDescriptor {
    /// User identifier, URL-safe base64 without padding.
    #[serde(default)]
    pub id: Option<String>,

    /// `name`, `displayName` and anything else, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Login challenge descriptor as issued by `/login/begin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginChallenge {
    #[serde(default)]
    pub challenge: Option<String>,

    /// Credentials the server will accept. Absent and empty mean different
    /// things to an authenticator, so absence is preserved as `None`.
    #[serde(
        rename = "allowCredentials",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_credentials: Option<Vec<CredentialDescriptor>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `allowCredentials`: an encoded credential id plus
/// pass-through fields (`type`, transport hints).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialDescriptor {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// --- Binary requests handed to the authenticator capability ---

/// Registration descriptor with byte fields decoded; the shape the
/// credential capability's `create` operation takes.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationRequest {
    pub challenge: Vec<u8>,
    pub user: UserHandle,
    pub extra: Map<String, Value>,
}

/// Decoded user entity of a [`CreationRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserHandle {
    pub id: Vec<u8>,
    pub extra: Map<String, Value>,
}

/// Login descriptor with byte fields decoded; the shape the capability's
/// `get` operation takes.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionRequest {
    pub challenge: Vec<u8>,
    /// `None` when the descriptor had no allow-list; never synthesized
    /// as an empty list.
    pub allow_credentials: Option<Vec<AllowedCredential>>,
    pub extra: Map<String, Value>,
}

/// Decoded `allowCredentials` entry; order and pass-through fields are
/// preserved from the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedCredential {
    pub id: Vec<u8>,
    pub extra: Map<String, Value>,
}

// --- Authenticator results (raw bytes) ---

/// What the capability returns from a successful `create` invocation.
#[derive(Debug, Clone)]
pub struct CreatedCredential {
    /// Credential identifier, already text in capability-native form.
    pub id: String,
    /// Attestation object: authenticator data plus attestation statement.
    pub attestation_object: Vec<u8>,
    /// JSON-encoded client data (challenge, origin, type) the server
    /// re-validates.
    pub client_data_json: Vec<u8>,
}

/// What the capability returns from a successful `get` invocation.
#[derive(Debug, Clone)]
pub struct AssertedCredential {
    pub id: String,
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
    /// Present only when the authenticator discloses it.
    pub user_handle: Option<Vec<u8>>,
}

// --- Finish-phase payloads (byte fields re-encoded) ---

/// Body of `POST /register/finish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub id: String,
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

/// Body of `POST /login/finish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub id: String,
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub signature: String,
    /// Omitted from the wire entirely when no user handle was disclosed;
    /// an absent handle is not an empty one.
    #[serde(
        rename = "userHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_handle: Option<String>,
}

// --- Server confirmations ---

/// Success payload of `/register/finish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfirmation {
    #[serde(rename = "authenticatorName")]
    pub authenticator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaguid: Option<String>,
}

/// Success payload of `/login/finish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfirmation {
    pub username: String,
}
