use crate::dispatcher::Handler;
use crate::error::{HandlerError, HttpError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A typed request: the event deserialized into the handler's request type,
/// plus the untouched invocation context.
#[derive(Debug, Clone)]
pub struct TypedHandlerRequest<T> {
    /// The event, deserialized into the handler's request type. Unknown event
    /// fields are ignored, so request types only declare what they use.
    pub data: T,
    /// The invocation context, passed through unmodified
    pub context: Value,
}

/// Trait implemented by typed handlers.
///
/// A handler receives a [`TypedHandlerRequest`] and returns a typed response
/// that is serialized back to JSON for the caller.
#[async_trait]
pub trait TypedHandler: Send + Sync {
    /// The typed request (deserialized from the inbound event)
    type Request: DeserializeOwned + Send;
    /// The typed response (serialized to JSON)
    type Response: Serialize + Send;

    /// Handle a typed request.
    async fn handle(
        &self,
        req: TypedHandlerRequest<Self::Request>,
    ) -> Result<Self::Response, HandlerError>;
}

/// A [`TypedHandler`] wrapped as a plain [`Handler`].
///
/// Built with [`typed`].
pub struct Typed<H> {
    inner: H,
}

/// Wrap a typed handler for registration on a route.
#[must_use]
pub fn typed<H: TypedHandler>(handler: H) -> Typed<H> {
    Typed { inner: handler }
}

#[async_trait]
impl<H: TypedHandler> Handler for Typed<H> {
    async fn invoke(&self, event: Value, context: Value) -> Result<Value, HandlerError> {
        let data = serde_json::from_value::<H::Request>(event).map_err(|error| {
            HandlerError::Validation {
                message: error.to_string(),
                details: None,
            }
        })?;
        let response = self.inner.handle(TypedHandlerRequest { data, context }).await?;
        serde_json::to_value(response).map_err(|error| {
            HandlerError::Http(HttpError::internal(format!(
                "failed to serialize handler response: {error}"
            )))
        })
    }
}
