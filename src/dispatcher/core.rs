//! Dispatcher core - the handler trait and the single-invocation step.

use crate::error::{normalize, HandlerError, RouteError};
use crate::router::Route;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// An asynchronous handler for one route.
///
/// Implementors receive the inbound event and invocation context exactly as
/// the hosting runtime supplied them and produce a response value, or fail
/// with a [`HandlerError`] describing the failure shape.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one invocation.
    async fn invoke(&self, event: Value, context: Value) -> Result<Value, HandlerError>;
}

/// Adapter turning a plain async closure into a [`Handler`].
///
/// Built with [`handler_fn`].
pub struct FnHandler<F> {
    f: F,
}

/// Wrap an async closure as a [`Handler`].
///
/// ```rust,ignore
/// let echo = handler_fn(|event: Value, _context: Value| async move { Ok(event) });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(Value, Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
    F: Fn(Value, Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
    async fn invoke(&self, event: Value, context: Value) -> Result<Value, HandlerError> {
        (self.f)(event, context).await
    }
}

/// Invoke the matched route's handler exactly once and normalize any failure.
///
/// Resolves with the handler's response unchanged; there is no response
/// transformation and no retry.
pub(crate) async fn invoke(
    route: &Route,
    event: Value,
    context: Value,
) -> Result<Value, RouteError> {
    debug!(
        path = %route.path(),
        method = %route.method(),
        "Request dispatched to handler"
    );

    match route.handler().invoke(event, context).await {
        Ok(response) => {
            debug!(
                path = %route.path(),
                method = %route.method(),
                "Handler resolved"
            );
            Ok(response)
        }
        Err(error) => {
            warn!(
                path = %route.path(),
                method = %route.method(),
                error = %error,
                "Handler rejected"
            );
            Err(normalize(error))
        }
    }
}
