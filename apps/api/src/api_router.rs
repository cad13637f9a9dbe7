use axum::Router;
use axum::routing::{get, post};
use console_access_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .route(
            "/api/access/effective-role",
            post(handlers::access::effective_role_handler),
        )
        .route(
            "/api/access/silo-rows",
            post(handlers::access::silo_access_rows_handler),
        )
        .route(
            "/api/access/project-rows",
            post(handlers::access::project_access_rows_handler),
        )
        .route(
            "/api/access/user-role",
            post(handlers::access::user_role_handler),
        )
        .route(
            "/api/errors/process",
            post(handlers::errors::process_error_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
