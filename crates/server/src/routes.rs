pub mod persons;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use common::types::Health;

use crate::errors::INTERNAL_ERROR;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Panics inside a handler become a plain 500; the payload only goes to the log.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(event = "handler_panic", panic = %detail, "request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
}

/// Build the full application router: person CRUD plus health.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let persons = Router::new()
        .route("/person", get(persons::list_people).post(persons::create_person))
        .route(
            "/person/:ssn",
            get(persons::get_person)
                .put(persons::update_person)
                .delete(persons::delete_person),
        );

    Router::new()
        .route("/health", get(health))
        .merge(persons)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
