use super::{Route, RouteTable};
use crate::dispatcher::handler_fn;
use crate::error::{HandlerError, RegisterError};
use http::Method;
use serde_json::{json, Value};

fn noop_route(path: &str, method: &str) -> Result<Route, RegisterError> {
    Route::new(
        path,
        method,
        handler_fn(|_event: Value, _context: Value| async move {
            Ok::<_, HandlerError>(json!(null))
        }),
    )
}

#[test]
fn route_method_is_normalized_to_uppercase() {
    let route = noop_route("/hello", "get").expect("valid route");
    assert_eq!(route.method(), &Method::GET);
    assert_eq!(route.path(), "/hello");
}

#[test]
fn route_rejects_empty_path() {
    assert_eq!(noop_route("", "get").unwrap_err(), RegisterError::EmptyPath);
}

#[test]
fn route_rejects_empty_method() {
    assert_eq!(
        noop_route("/hello", "").unwrap_err(),
        RegisterError::EmptyMethod
    );
}

#[test]
fn route_rejects_invalid_method_token() {
    assert_eq!(
        noop_route("/hello", "GE T").unwrap_err(),
        RegisterError::InvalidMethod {
            method: "GE T".to_string()
        }
    );
}

#[test]
fn table_lookup_is_case_insensitive_on_method() {
    let mut table = RouteTable::new();
    table.insert(noop_route("/hello", "get").expect("valid route"));
    assert!(table.lookup("/hello", "GET").is_some());
    assert!(table.lookup("/hello", "get").is_some());
    assert!(table.lookup("/hello", "POST").is_none());
    assert!(table.lookup("/goodbye", "GET").is_none());
}

#[test]
fn table_holds_independent_methods_per_path() {
    let mut table = RouteTable::new();
    table.insert(noop_route("/hello", "get").expect("valid route"));
    table.insert(noop_route("/hello", "post").expect("valid route"));
    assert_eq!(table.len(), 2);
    assert!(table.lookup("/hello", "GET").is_some());
    assert!(table.lookup("/hello", "POST").is_some());
}

#[test]
fn table_replaces_on_duplicate_pair() {
    let mut table = RouteTable::new();
    assert!(table
        .insert(noop_route("/hello", "get").expect("valid route"))
        .is_none());
    let replaced = table.insert(noop_route("/hello", "GET").expect("valid route"));
    assert!(replaced.is_some());
    assert_eq!(table.len(), 1);
}

#[test]
fn empty_table_reports_empty() {
    let table = RouteTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}
