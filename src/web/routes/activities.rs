use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::database::DirectorySnapshot;
use crate::errors::SignupError;
use crate::models::{EmailQuery, MessageResponse};
use crate::services::activities_service;
use crate::web::app::AppState;

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<DirectorySnapshot> {
    Json(activities_service::list_activities(&state.directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::sign_up(&state.directory, &activity_name, &query.email).map(Json)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::unregister(&state.directory, &activity_name, &query.email).map(Json)
}
