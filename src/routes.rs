use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{exercises, health};

pub fn create_router(
    exercises_state: exercises::ExercisesState,
    cors_allowed_origins: &[String],
) -> Router {
    Router::new()
        // Exercise routes
        .route(
            "/api/exercises",
            get(exercises::list).post(exercises::create),
        )
        .route(
            "/api/exercises/{id}",
            get(exercises::show)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .with_state(exercises_state)
        // Liveness
        .route("/health", get(health::health_check))
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
