//! Unified error types for the `folio` crate.
//!
//! This module centralizes all failures that can occur while talking to the
//! Folio backend and provides a single top-level [`Error`] enum plus the
//! convenient [`Result`] alias. Lower-level errors (`reqwest`, URL parsing)
//! are mapped into structured variants so callers can handle them precisely.
//!
//! The classification helpers ([`Error::is_auth_failure`],
//! [`Error::is_handle_conflict`], [`Error::is_not_found`]) encode the wire
//! contract the stateful drivers key their transitions on. The backend
//! reports errors as free-text `detail` messages, so each helper accepts the
//! structured HTTP status first and falls back to the documented substring
//! match for backward compatibility.

use reqwest::StatusCode;
use thiserror::Error;

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::FolioClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

// --- The Main Operational Error Enum ---

/// The crate's top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Request`] — HTTP transport/server/validation issues
/// - [`Error::Parse`] — URL parsing failures
/// - [`Error::Build`] — construction of the client failed
///
/// Most lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request/response failed (transport, server, validation, JSON).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed (reqwest or base-URL configuration).
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

impl Error {
    /// Whether this error is an authentication failure that must take the
    /// sign-out path: HTTP 401, or a credential-validation message from the
    /// backend's token guard.
    ///
    /// Transport failures never match; a network outage must not destroy a
    /// valid session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Request(e) if e.is_auth_failure())
    }

    /// Whether this error is the handle-uniqueness conflict: HTTP 409, or a
    /// message containing `"handle already taken"` (case-insensitive).
    pub fn is_handle_conflict(&self) -> bool {
        matches!(self, Error::Request(e) if e.is_handle_conflict())
    }

    /// Whether this error means the requested resource does not exist:
    /// HTTP 404, or a message containing `"404"` or `"not found"`
    /// (case-insensitive).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Request(e) if e.is_not_found())
    }
}

// --- Consolidated Request Error ---

/// Transport and server-side HTTP errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, TLS, I/O, etc.).
    /// Carries no HTTP status.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-success status. Includes status and the
    /// `detail` message extracted from the response body.
    #[error("Server responded with an error: {status} - {message}")]
    Server {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The server's `detail` message, or a fallback reason when the body
        /// had no parseable `detail`.
        message: String,
    },

    /// Caller supplied an invalid argument for this API, or a local
    /// precondition (like persisting the session token) failed.
    #[error("Invalid request: {message}")]
    Validation {
        /// Human-readable explanation of what was invalid.
        message: String,
    },

    /// JSON decoding failed when parsing a server response.
    #[error("JSON decode error: {message}")]
    DecodeJson {
        /// Error message from the JSON deserializer.
        message: String,
    },
}

impl RequestError {
    /// See [`Error::is_auth_failure`].
    pub fn is_auth_failure(&self) -> bool {
        match self {
            RequestError::Server { status, message } => {
                *status == StatusCode::UNAUTHORIZED
                    || message.to_lowercase().contains("validate credentials")
            }
            _ => false,
        }
    }

    /// See [`Error::is_handle_conflict`].
    pub fn is_handle_conflict(&self) -> bool {
        match self {
            RequestError::Server { status, message } => {
                *status == StatusCode::CONFLICT
                    || message.to_lowercase().contains("handle already taken")
            }
            _ => false,
        }
    }

    /// See [`Error::is_not_found`].
    pub fn is_not_found(&self) -> bool {
        match self {
            RequestError::Server { status, message } => {
                *status == StatusCode::NOT_FOUND || {
                    let lower = message.to_lowercase();
                    lower.contains("404") || lower.contains("not found")
                }
            }
            _ => false,
        }
    }
}

/// A specialized `Result` type for `folio` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

// Request Errors
impl_from_for_error!(reqwest::Error, Error::Request);
