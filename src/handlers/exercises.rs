use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::{Exercise, ExerciseFilter, ExerciseInput};
use crate::services::ExerciseService;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_service: ExerciseService,
}

pub async fn create(
    State(state): State<ExercisesState>,
    Json(input): Json<ExerciseInput>,
) -> Result<(StatusCode, Json<Exercise>)> {
    let exercise = state.exercise_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn list(
    State(state): State<ExercisesState>,
    Query(filter): Query<ExerciseFilter>,
) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_service.list(&filter).await?;
    Ok(Json(exercises))
}

pub async fn show(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
) -> Result<Json<Exercise>> {
    let exercise = state.exercise_service.get(id).await?;
    Ok(Json(exercise))
}

pub async fn update(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
    Json(input): Json<ExerciseInput>,
) -> Result<Json<Exercise>> {
    let exercise = state.exercise_service.update(id, input).await?;
    Ok(Json(exercise))
}

pub async fn delete(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
) -> Result<String> {
    state.exercise_service.delete(id).await?;
    Ok(format!("{}: deleted this Exercise", id))
}
