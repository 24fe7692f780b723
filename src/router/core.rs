//! Router core - registration and the dispatch entry point.

use crate::config::RouterConfig;
use crate::dispatcher;
use crate::error::{normalize, HttpError, RouteError};
use crate::router::{Route, RouteTable};
use crate::validator::EventValidator;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Dispatches inbound invocation events to registered handlers.
///
/// Each `Router` is an independently owned instance with its own table; there
/// is no process-wide shared state, so multiple isolated dispatchers (e.g. in
/// tests) never cross-contaminate.
#[derive(Clone)]
pub struct Router {
    config: RouterConfig,
    validator: EventValidator,
    table: RouteTable,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with the default event shape
    /// (`/resource` + `/httpMethod`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a router reading the resource and method from the locations
    /// named by `config`. The event schema is compiled once, here.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        let validator = EventValidator::new(&config);
        Router {
            config,
            validator,
            table: RouteTable::new(),
        }
    }

    /// Register one route.
    ///
    /// If a route already exists for the same `(path, method)` pair it is
    /// replaced (last write wins) and the replacement is logged.
    pub fn register(&mut self, route: Route) {
        let path = route.path().to_string();
        let method = route.method().clone();
        if self.table.insert(route).is_some() {
            warn!(
                path = %path,
                method = %method,
                "Replaced existing route handler"
            );
        } else {
            info!(
                path = %path,
                method = %method,
                registered_routes = self.table.len(),
                "Route registered"
            );
        }
    }

    /// Register a batch of routes.
    ///
    /// Definitions fail shape validation at [`Route::new`], before the batch
    /// exists, so a batch can never be partially applied by a malformed entry.
    pub fn register_all(&mut self, routes: impl IntoIterator<Item = Route>) {
        for route in routes {
            self.register(route);
        }
    }

    /// Number of registered routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.table.len()
    }

    /// Dispatch one inbound event to its registered handler.
    ///
    /// Invokes at most one handler, exactly once, with no retry. The returned
    /// future resolves with the handler's response unchanged, or fails with:
    ///
    /// - 500 when `context` is absent
    /// - 400 when the event fails shape validation
    /// - 501 when no handler is registered for the `(resource, method)` pair
    /// - the handler's own failure, normalized via [`normalize`]
    ///
    /// # Errors
    ///
    /// All routing-level failures are reported through [`RouteError`]; none
    /// are swallowed and nothing panics for malformed input.
    pub async fn route(&self, event: Value, context: Option<Value>) -> Result<Value, RouteError> {
        let Some(context) = context else {
            warn!("Dispatch rejected - invocation context is missing");
            return Err(RouteError::Http(HttpError::internal(
                "context is required",
            )));
        };

        if let Err(error) = self.validator.validate(&event) {
            warn!(error = %error, "Dispatch rejected - event failed shape validation");
            return Err(normalize(error));
        }

        // Guaranteed present as non-empty strings by the validator.
        let resource = self.event_string(&event, &self.config.resource_pointer);
        let method = self
            .event_string(&event, &self.config.method_pointer)
            .to_ascii_uppercase();

        debug!(
            resource = %resource,
            method = %method,
            registered_routes = self.table.len(),
            "Route lookup"
        );

        let Some(route) = self.table.lookup(&resource, &method) else {
            warn!(
                resource = %resource,
                method = %method,
                registered_routes = self.table.len(),
                "No route registered for event"
            );
            return Err(RouteError::Http(HttpError::not_implemented(format!(
                "{method} handler for path [{resource}] not registered"
            ))));
        };

        dispatcher::invoke(route, event, context).await
    }

    fn event_string(&self, event: &Value, pointer: &str) -> String {
        event
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}
