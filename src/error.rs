//! # Error Module
//!
//! The failure taxonomy for the router, and the normalization step that turns
//! handler failures into the canonical payload shape.
//!
//! Three distinct error types cross the public surface:
//!
//! - [`RegisterError`] - configuration errors, raised synchronously at route
//!   construction time (fail fast, never silently accepted)
//! - [`HandlerError`] - what a handler fails with: a validation failure, a
//!   canonical HTTP-style failure, or anything else
//! - [`RouteError`] - what [`Router::route`](crate::Router::route) fails
//!   with: either a normalized [`HttpError`] payload or an opaque value
//!   passed through unchanged
//!
//! [`normalize`] maps the former into the latter as an exhaustive match over
//! the tagged variants; there is no duck-typed shape probing anywhere.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Boxed error value with no shape the router recognizes.
///
/// Carried through dispatch unchanged; the router never invents a payload for
/// failures it does not understand.
pub type OpaqueError = Box<dyn std::error::Error + Send + Sync>;

/// The canonical HTTP-style failure payload: `{statusCode, message, details?}`.
///
/// Constructed fresh on every failure path and never stored. Serializes with
/// the field names the hosting runtime expects (`statusCode`, `message`,
/// `details`).
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct HttpError {
    /// HTTP status code (400, 500, 501, ...)
    pub status_code: u16,
    /// Human-readable failure message
    pub message: String,
    /// Optional structured detail entries (e.g. per-field validation issues)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl HttpError {
    /// Create a payload with an arbitrary status code.
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        HttpError {
            status_code,
            message: message.into(),
            details: None,
        }
    }

    /// 400 Bad Request - the client sent something malformed.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(400, message)
    }

    /// 500 Internal Server Error - the caller or handler broke its contract.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        HttpError::new(500, message)
    }

    /// 501 Not Implemented - no handler registered for the requested route.
    #[must_use]
    pub fn not_implemented(message: impl Into<String>) -> Self {
        HttpError::new(501, message)
    }

    /// Attach structured detail entries to the payload.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// A failure signaled by a handler (or by inbound event validation).
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Input failed validation against a required shape.
    #[error("{message}")]
    Validation {
        /// Human-readable validation message
        message: String,
        /// Ordered per-field violation entries, when available
        details: Option<Value>,
    },
    /// Failure that already carries the canonical HTTP-style payload.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Anything else. Passed through dispatch unchanged.
    #[error("{0}")]
    Other(OpaqueError),
}

impl HandlerError {
    /// Create a validation failure with no detail entries.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        HandlerError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Create an opaque failure from any error-like value.
    #[must_use]
    pub fn other(error: impl Into<OpaqueError>) -> Self {
        HandlerError::Other(error.into())
    }
}

/// A failure returned by [`Router::route`](crate::Router::route).
#[derive(Debug, Error)]
pub enum RouteError {
    /// Normalized HTTP-style payload constructed or recognized by the router
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Handler failure the router does not recognize, passed through unchanged
    #[error("{0}")]
    Opaque(OpaqueError),
}

impl RouteError {
    /// The canonical payload, if this failure carries one.
    #[must_use]
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            RouteError::Http(http) => Some(http),
            RouteError::Opaque(_) => None,
        }
    }
}

/// A route definition that fails shape validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The route path was empty
    #[error("route path must be a non-empty string")]
    EmptyPath,
    /// The route method was empty
    #[error("route method must be a non-empty string")]
    EmptyMethod,
    /// The route method contained characters that are not valid in an HTTP
    /// method token
    #[error("route method `{method}` is not a valid HTTP method token")]
    InvalidMethod {
        /// The rejected method string, as supplied
        method: String,
    },
}

/// Normalize a handler failure into the shape `route` reports to its caller.
///
/// Pure and deterministic; called on every rejection path in dispatch:
///
/// - validation failures become a 400 payload with the original message
///   prefixed by `Invalid request input: `, detail entries carried along
/// - canonical HTTP-style failures are unwrapped as-is
/// - everything else is passed through unchanged
#[must_use]
pub fn normalize(error: HandlerError) -> RouteError {
    match error {
        HandlerError::Validation { message, details } => {
            let mut http = HttpError::bad_request(format!("Invalid request input: {message}"));
            http.details = details;
            RouteError::Http(http)
        }
        HandlerError::Http(http) => RouteError::Http(http),
        HandlerError::Other(error) => RouteError::Opaque(error),
    }
}
