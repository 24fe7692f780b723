//! Registration behavior: shape validation, normalization, and table effects.

use lambdarouter::{handler_fn, HandlerError, RegisterError, Route, Router};
use serde_json::{json, Value};

mod tracing_util;
use tracing_util::TestTracing;

fn hello_handler() -> impl lambdarouter::Handler + 'static {
    handler_fn(|_event: Value, _context: Value| async move {
        Ok::<_, HandlerError>(json!("hello, world"))
    })
}

#[test]
fn register_accepts_a_valid_route() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();
    router.register(Route::new("/hello", "get", hello_handler()).expect("valid route"));
    assert_eq!(router.route_count(), 1);
}

#[test]
fn route_with_empty_path_fails_validation() {
    assert_eq!(
        Route::new("", "get", hello_handler()).unwrap_err(),
        RegisterError::EmptyPath
    );
}

#[test]
fn route_with_empty_method_fails_validation() {
    assert_eq!(
        Route::new("/hello", "", hello_handler()).unwrap_err(),
        RegisterError::EmptyMethod
    );
}

#[test]
fn route_with_malformed_method_fails_validation() {
    let err = Route::new("/hello", "not a method", hello_handler()).unwrap_err();
    assert_eq!(
        err,
        RegisterError::InvalidMethod {
            method: "not a method".to_string()
        }
    );
    assert!(err.to_string().contains("not a method"));
}

#[test]
fn malformed_definition_leaves_the_table_unmodified() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();
    assert!(Route::new("", "get", hello_handler()).is_err());
    assert_eq!(router.route_count(), 0);
    router.register(Route::new("/hello", "get", hello_handler()).expect("valid route"));
    assert_eq!(router.route_count(), 1);
}

#[test]
fn same_path_supports_multiple_methods() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();
    router.register_all([
        Route::new("/hello", "get", hello_handler()).expect("valid route"),
        Route::new("/hello", "post", hello_handler()).expect("valid route"),
    ]);
    assert_eq!(router.route_count(), 2);
}

#[test]
fn reregistering_a_pair_overwrites_the_prior_entry() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();
    router.register(Route::new("/hello", "get", hello_handler()).expect("valid route"));
    router.register(Route::new("/hello", "GET", hello_handler()).expect("valid route"));
    assert_eq!(router.route_count(), 1);
}

#[test]
fn independent_routers_do_not_share_tables() {
    let _tracing = TestTracing::init();
    let mut a = Router::new();
    let b = Router::new();
    a.register(Route::new("/hello", "get", hello_handler()).expect("valid route"));
    assert_eq!(a.route_count(), 1);
    assert_eq!(b.route_count(), 0);
}
