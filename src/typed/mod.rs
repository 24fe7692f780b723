//! # Typed Module
//!
//! Type-safe handler adapters over serde.
//!
//! A [`TypedHandler`] declares a deserializable request type and a
//! serializable response type; [`typed`] wraps it into a plain
//! [`Handler`](crate::Handler). Deserialization failures surface as 400
//! validation errors, serialization failures as 500, so typed handlers get
//! input validation without touching the error taxonomy themselves.

mod core;

pub use self::core::{typed, Typed, TypedHandler, TypedHandlerRequest};
