//! # Router Configuration Module
//!
//! Configures where the router finds the resource path and HTTP method inside
//! an inbound invocation event. Both locations are JSON pointers
//! ([RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901)) resolved
//! against the event value.
//!
//! The defaults match the common API-gateway proxy event shape:
//!
//! ```json
//! { "resource": "/hello", "httpMethod": "GET", "body": "..." }
//! ```
//!
//! Hosting runtimes that nest the routing fields can point the router at them
//! instead, e.g. `/context/resource-path` and `/context/http-method`.
//!
//! ## Environment Variables
//!
//! [`RouterConfig::from_env`] reads:
//!
//! - `LROUTER_RESOURCE_POINTER` - pointer to the resource path string
//! - `LROUTER_METHOD_POINTER` - pointer to the HTTP method string
//!
//! Unset variables fall back to the defaults.

use std::env;

/// Default pointer to the resource path within an event.
pub const DEFAULT_RESOURCE_POINTER: &str = "/resource";

/// Default pointer to the HTTP method within an event.
pub const DEFAULT_METHOD_POINTER: &str = "/httpMethod";

/// Event shape configuration for a [`Router`](crate::Router).
///
/// Holds the JSON-pointer locations of the two event fields the router reads.
/// The rest of the event is opaque payload passed to handlers unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// JSON pointer to the resource path string (e.g. `/resource`)
    pub resource_pointer: String,
    /// JSON pointer to the HTTP method string (e.g. `/httpMethod`)
    pub method_pointer: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            resource_pointer: DEFAULT_RESOURCE_POINTER.to_string(),
            method_pointer: DEFAULT_METHOD_POINTER.to_string(),
        }
    }
}

impl RouterConfig {
    /// Create a configuration from explicit pointer locations.
    ///
    /// A missing leading `/` is tolerated and added, so `"resource"` and
    /// `"/resource"` are equivalent.
    #[must_use]
    pub fn new(resource_pointer: impl Into<String>, method_pointer: impl Into<String>) -> Self {
        RouterConfig {
            resource_pointer: normalize_pointer(resource_pointer.into()),
            method_pointer: normalize_pointer(method_pointer.into()),
        }
    }

    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = RouterConfig::default();
        RouterConfig {
            resource_pointer: env::var("LROUTER_RESOURCE_POINTER")
                .map(normalize_pointer)
                .unwrap_or(defaults.resource_pointer),
            method_pointer: env::var("LROUTER_METHOD_POINTER")
                .map(normalize_pointer)
                .unwrap_or(defaults.method_pointer),
        }
    }
}

fn normalize_pointer(raw: String) -> String {
    if raw.starts_with('/') {
        raw
    } else {
        format!("/{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pointers_match_proxy_event_shape() {
        let config = RouterConfig::default();
        assert_eq!(config.resource_pointer, "/resource");
        assert_eq!(config.method_pointer, "/httpMethod");
    }

    #[test]
    fn new_adds_missing_leading_slash() {
        let config = RouterConfig::new("resource", "context/http-method");
        assert_eq!(config.resource_pointer, "/resource");
        assert_eq!(config.method_pointer, "/context/http-method");
    }

    #[test]
    fn new_keeps_existing_leading_slash() {
        let config = RouterConfig::new("/context/resource-path", "/context/http-method");
        assert_eq!(config.resource_pointer, "/context/resource-path");
        assert_eq!(config.method_pointer, "/context/http-method");
    }
}
