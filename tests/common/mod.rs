#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gym_tracker::db::{create_memory_pool, DbPool};
use gym_tracker::handlers::exercises::ExercisesState;
use gym_tracker::migrations::run_migrations_for_tests;
use gym_tracker::models::{Exercise, ExerciseInput};
use gym_tracker::repositories::ExerciseRepository;
use gym_tracker::services::ExerciseService;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let exercises_state = ExercisesState {
        exercise_service: ExerciseService::new(ExerciseRepository::new(pool)),
    };
    gym_tracker::routes::create_router(exercises_state, &[])
}

// Test data creation helpers
pub async fn create_test_exercise(
    pool: &DbPool,
    name: &str,
    muscle_group: &str,
    day_of_week: &str,
) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo
        .create(ExerciseInput {
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            weights: 50,
            sets: 3,
            reps: 12,
            day_of_week: day_of_week.to_string(),
        })
        .await
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).into_owned()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
