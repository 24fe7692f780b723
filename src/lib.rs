//! # lambdarouter
//!
//! **lambdarouter** is a minimal request dispatcher for function-as-a-service
//! handlers. It maintains a table mapping `(resource path, HTTP method)` pairs
//! to asynchronous handler functions, validates inbound invocation events
//! against a required shape, locates the matching handler, invokes it, and
//! normalizes any failure into a uniform HTTP-style error payload.
//!
//! It is deliberately **not** an HTTP server: there is no networking, no
//! wildcard or regex path matching, and no middleware chaining. Events are
//! delivered by a hosting runtime (e.g. a Lambda-style invocation runtime) as
//! opaque JSON values; the router only reads the resource and method fields at
//! configurable locations within the event.
//!
//! ## Architecture
//!
//! - **[`router`]** - route table, registration, and the dispatch entry point
//! - **[`dispatcher`]** - the [`Handler`] trait and handler invocation
//! - **[`validator`]** - JSON Schema validation of inbound events
//! - **[`error`]** - the failure taxonomy and error normalization
//! - **[`config`]** - event shape configuration (where resource/method live)
//! - **[`typed`]** - type-safe handler adapters over serde
//!
//! ## Example
//!
//! ```rust,ignore
//! use lambdarouter::{handler_fn, Route, Router};
//! use serde_json::{json, Value};
//!
//! let mut router = Router::new();
//! router.register(Route::new(
//!     "/hello",
//!     "get",
//!     handler_fn(|_event: Value, _context: Value| async move {
//!         Ok(json!("hello, world"))
//!     }),
//! )?);
//!
//! let event = json!({ "resource": "/hello", "httpMethod": "GET" });
//! let response = router.route(event, Some(json!({}))).await?;
//! assert_eq!(response, json!("hello, world"));
//! ```
//!
//! ## Error handling
//!
//! Every runtime failure surfaces through the `Err` arm of the future returned
//! by [`Router::route`]; nothing is swallowed and nothing is retried. Failures
//! the router recognizes (validation failures, canonical HTTP-style errors)
//! are normalized to the [`HttpError`] payload shape; anything else a handler
//! fails with is passed through unchanged as [`RouteError::Opaque`].
//!
//! | Failure | Status |
//! |---------|--------|
//! | missing invocation context | 500 |
//! | event fails shape validation | 400 |
//! | no handler registered for `(path, method)` | 501 |
//! | handler-signaled validation failure | 400 |
//! | handler-signaled HTTP-style failure | as signaled |
//! | anything else | passed through unchanged |

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod router;
pub mod typed;
pub mod validator;

pub use async_trait::async_trait;
pub use config::RouterConfig;
pub use dispatcher::{handler_fn, FnHandler, Handler};
pub use error::{normalize, HandlerError, HttpError, OpaqueError, RegisterError, RouteError};
pub use router::{Route, RouteTable, Router};
pub use typed::{typed, Typed, TypedHandler, TypedHandlerRequest};
pub use validator::EventValidator;
