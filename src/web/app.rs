use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityDirectory;
use crate::web::routes::activities;

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Clone, Debug)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
