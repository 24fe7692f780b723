//! Route definitions and the nested route table.

use crate::dispatcher::Handler;
use crate::error::RegisterError;
use http::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A registered binding of `(path, method)` to a handler.
///
/// A `Route` can only be obtained through [`Route::new`], which validates the
/// definition, so every route that exists is well-formed: non-empty path,
/// non-empty method token normalized to uppercase, and a handler satisfying
/// the two-argument invocation contract (enforced by the [`Handler`] trait).
#[derive(Clone)]
pub struct Route {
    path: String,
    method: Method,
    handler: Arc<dyn Handler>,
}

impl Route {
    /// Validate a route definition and build the route.
    ///
    /// The method is compared case-insensitively at dispatch time, so `"get"`
    /// and `"GET"` produce the same registration.
    ///
    /// # Errors
    ///
    /// Fails synchronously, before any table mutation could occur, when the
    /// path is empty, the method is empty, or the method is not a valid HTTP
    /// method token.
    pub fn new(
        path: impl Into<String>,
        method: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, RegisterError> {
        let path = path.into();
        if path.is_empty() {
            return Err(RegisterError::EmptyPath);
        }
        if method.is_empty() {
            return Err(RegisterError::EmptyMethod);
        }
        let normalized = Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(
            |_| RegisterError::InvalidMethod {
                method: method.to_string(),
            },
        )?;
        Ok(Route {
            path,
            method: normalized,
            handler: Arc::new(handler),
        })
    }

    /// The exact path string this route is registered under.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The uppercased method this route is registered under.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub(crate) fn handler(&self) -> &dyn Handler {
        &*self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Nested mapping from path to uppercased method to a single [`Route`].
///
/// Invariant: at most one route per `(path, method)` pair. Re-inserting the
/// same pair replaces the prior entry (last write wins). Insertion order
/// carries no semantic weight.
#[derive(Clone, Default)]
pub struct RouteTable {
    paths: HashMap<String, HashMap<String, Route>>,
}

impl RouteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        RouteTable::default()
    }

    /// Insert a route, returning the route it replaced, if any.
    pub fn insert(&mut self, route: Route) -> Option<Route> {
        self.paths
            .entry(route.path.clone())
            .or_default()
            .insert(route.method.as_str().to_string(), route)
    }

    /// Look up a route by exact path and case-insensitive method.
    #[must_use]
    pub fn lookup(&self, path: &str, method: &str) -> Option<&Route> {
        self.paths.get(path)?.get(&method.to_ascii_uppercase())
    }

    /// Total number of registered routes across all paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.values().map(HashMap::len).sum()
    }

    /// True when no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.len())
            .finish()
    }
}
