//! # Router Module
//!
//! Route registration and event dispatch.
//!
//! ## Overview
//!
//! The router owns a [`RouteTable`] mapping `(path, METHOD)` pairs to handler
//! functions and exposes exactly two operations:
//!
//! 1. **Registration** ([`Router::register`] / [`Router::register_all`]):
//!    build-time population of the table. Definitions are shape-checked by the
//!    [`Route`] constructor before any table mutation occurs, so a malformed
//!    definition fails fast and never leaves the table half-updated.
//!
//! 2. **Dispatch** ([`Router::route`]): runtime handling of one inbound
//!    event. The event is validated, the matching route is looked up by exact
//!    path and case-insensitive method, and the handler is invoked exactly
//!    once. All failures surface through the returned future, normalized to
//!    the canonical payload where the router recognizes their shape.
//!
//! ## Concurrency
//!
//! Dispatch takes `&self` and the table is only mutated through `&mut self`
//! registration, so the borrow checker rules out register/dispatch
//! interleaving statically. The router is `Clone` and can be shared behind an
//! `Arc` for concurrent dispatch; it places no concurrency limit, performs no
//! queueing, and enforces no timeouts - those belong to the hosting runtime.

mod core;
mod table;

#[cfg(test)]
mod tests;

pub use self::core::Router;
pub use self::table::{Route, RouteTable};
