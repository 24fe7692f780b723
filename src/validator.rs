//! # Event Validator Module
//!
//! JSON Schema validation of inbound invocation events.
//!
//! The router treats validation as a black-box capability: given a value and
//! a schema, answer "valid" or produce a structured failure with a message
//! and ordered per-field detail entries. The schema itself is derived from
//! the [`RouterConfig`] pointers and requires exactly two things of an event:
//! a non-empty resource path string and a non-empty HTTP method string at the
//! configured locations. Everything else in the event is opaque payload.
//!
//! Compiling a schema is not free, so the validator is compiled once when the
//! router is constructed and shared behind an `Arc` across clones; dispatch
//! never recompiles.

use crate::config::RouterConfig;
use crate::error::HandlerError;
use jsonschema::Validator;
use serde_json::{json, Value};
use std::sync::Arc;

/// Validates inbound events against the required routing shape.
///
/// Cheap to clone; the compiled schema is shared.
#[derive(Clone)]
pub struct EventValidator {
    schema: Arc<Validator>,
}

impl EventValidator {
    /// Compile the event schema for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the derived schema fails to compile. The schema is generated
    /// internally from two JSON pointers, so this indicates a bug rather than
    /// a caller error.
    #[must_use]
    pub fn new(config: &RouterConfig) -> Self {
        let schema = event_schema(config);
        let compiled = jsonschema::validator_for(&schema).expect("event schema must compile");
        EventValidator {
            schema: Arc::new(compiled),
        }
    }

    /// Check one inbound event against the required shape.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Validation`] carrying the first violation as
    /// the message and every violation as an ordered detail entry of the form
    /// `{ "location": <instance pointer>, "message": <violation> }`.
    pub fn validate(&self, event: &Value) -> Result<(), HandlerError> {
        let issues: Vec<Value> = self
            .schema
            .iter_errors(event)
            .map(|error| {
                json!({
                    "location": error.instance_path().to_string(),
                    "message": error.to_string(),
                })
            })
            .collect();

        if issues.is_empty() {
            return Ok(());
        }

        let message = issues[0]["message"]
            .as_str()
            .unwrap_or("event does not match the required shape")
            .to_string();

        Err(HandlerError::Validation {
            message,
            details: Some(Value::Array(issues)),
        })
    }
}

/// Build the event schema: an object carrying a non-empty string at both
/// configured pointer locations.
///
/// The two pointers may share a prefix (e.g. both nested under `/context`),
/// so each is expressed as its own requirement chain and the chains are
/// combined with `allOf` instead of being merged structurally.
fn event_schema(config: &RouterConfig) -> Value {
    json!({
        "type": "object",
        "allOf": [
            pointer_schema(&pointer_segments(&config.resource_pointer)),
            pointer_schema(&pointer_segments(&config.method_pointer)),
        ],
    })
}

fn pointer_segments(pointer: &str) -> Vec<&str> {
    pointer.split('/').filter(|s| !s.is_empty()).collect()
}

fn pointer_schema(segments: &[&str]) -> Value {
    match segments.split_first() {
        None => json!({ "type": "string", "minLength": 1 }),
        Some((head, rest)) => json!({
            "type": "object",
            "required": [head],
            "properties": { *head: pointer_schema(rest) },
        }),
    }
}
