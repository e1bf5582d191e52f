use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::Person;
use serde_json::Value;

use crate::errors::ApiError;
use crate::state::ServerState;

/// Unwrap the JSON body, turning extractor rejections into plain-text errors.
fn body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(value) = payload?;
    Ok(value)
}

/// GET /person
pub async fn list_people(State(state): State<ServerState>) -> Json<Vec<Person>> {
    Json(state.persons.list().await)
}

/// GET /person/:ssn
pub async fn get_person(
    State(state): State<ServerState>,
    Path(ssn): Path<String>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.persons.get(&ssn).await?))
}

/// POST /person
pub async fn create_person(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let payload = body(payload)?;
    let created = state.persons.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /person/:ssn
pub async fn update_person(
    State(state): State<ServerState>,
    Path(ssn): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let payload = body(payload)?;
    Ok(Json(state.persons.update(&ssn, &payload).await?))
}

/// DELETE /person/:ssn
pub async fn delete_person(
    State(state): State<ServerState>,
    Path(ssn): Path<String>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.persons.delete(&ssn).await?))
}
