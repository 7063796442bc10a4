use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseFilter, ExerciseInput, ExerciseSelection};
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExerciseService {
    exercise_repo: ExerciseRepository,
}

impl ExerciseService {
    pub fn new(exercise_repo: ExerciseRepository) -> Self {
        Self { exercise_repo }
    }

    pub async fn create(&self, input: ExerciseInput) -> Result<Exercise> {
        let exercise = self.exercise_repo.create(input).await?;
        tracing::info!(id = exercise.id, name = %exercise.name, "Created exercise");
        Ok(exercise)
    }

    /// Applies at most one filter: day, else muscle group, else none.
    pub async fn list(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let selection = filter.selection();
        tracing::debug!(?selection, "Listing exercises");

        match selection {
            ExerciseSelection::Day(day) => self.exercise_repo.find_by_day_of_week(&day).await,
            ExerciseSelection::MuscleGroup(muscle_group) => {
                self.exercise_repo.find_by_muscle_group(&muscle_group).await
            }
            ExerciseSelection::All => self.exercise_repo.find_all().await,
        }
    }

    pub async fn get(&self, id: i64) -> Result<Exercise> {
        self.exercise_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::exercise_not_found(id))
    }

    /// Replaces every mutable field with the values in `input`.
    pub async fn update(&self, id: i64, input: ExerciseInput) -> Result<Exercise> {
        if !self.exercise_repo.update(id, input.clone()).await? {
            return Err(AppError::exercise_not_found(id));
        }

        tracing::info!(id, "Updated exercise");
        Ok(Exercise::from_input(id, input))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.exercise_repo.delete(id).await? {
            return Err(AppError::exercise_not_found(id));
        }

        tracing::info!(id, "Deleted exercise");
        Ok(())
    }
}
