//! # Dispatcher Module
//!
//! The handler invocation seam.
//!
//! ## Handler contract
//!
//! Every registered handler is called as `handler.invoke(event, context)` and
//! returns a future that resolves to a response value or fails with a
//! [`HandlerError`](crate::HandlerError). That is the sole contract handlers
//! must satisfy; the event and context are opaque JSON passed through
//! unmodified.
//!
//! Plain async closures become handlers via [`handler_fn`]:
//!
//! ```rust,ignore
//! let handler = handler_fn(|event: Value, _context: Value| async move {
//!     Ok(event)
//! });
//! ```
//!
//! ## Invocation
//!
//! Dispatch invokes the matched handler exactly once and applies
//! [`normalize`](crate::normalize) to any failure. Once invoked, a handler
//! runs to completion; dropping the dispatch future abandons the result but
//! the router provides no cancellation or timeout of its own.

mod core;

pub use self::core::{handler_fn, FnHandler, Handler};

pub(crate) use self::core::invoke;
