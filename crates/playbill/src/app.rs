use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        content::{
            add_genres, create_content, delete_content, filter_contents, get_content,
            list_contents, remove_genres, update_content,
        },
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let content_routes = Router::new()
        .route("/content", get(list_contents).post(create_content))
        .route("/content/filter", get(filter_contents))
        .route(
            "/content/{id}",
            get(get_content)
                .patch(update_content)
                .delete(delete_content),
        )
        .route("/content/{id}/genre", post(add_genres).delete(remove_genres))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(content_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
