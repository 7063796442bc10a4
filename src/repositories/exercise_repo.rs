use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseInput, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM gym_exercise WHERE id = ?")?;
            let result = stmt.query_row([id], Exercise::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM gym_exercise ORDER BY id")?;
            let exercises = stmt
                .query_map([], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_day_of_week(&self, day_of_week: &str) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        let day_of_week = day_of_week.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM gym_exercise WHERE day_of_week = ? ORDER BY id")?;
            let exercises = stmt
                .query_map([&day_of_week], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_muscle_group(&self, muscle_group: &str) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        let muscle_group = muscle_group.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM gym_exercise WHERE muscle_group = ? ORDER BY id")?;
            let exercises = stmt
                .query_map([&muscle_group], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Inserts a row and returns it with the id SQLite assigned.
    pub async fn create(&self, input: ExerciseInput) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO gym_exercise (name, muscle_group, weights, sets, reps, day_of_week)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    input.name,
                    input.muscle_group,
                    input.weights,
                    input.sets,
                    input.reps,
                    input.day_of_week
                ],
            )?;
            Ok(Exercise::from_input(conn.last_insert_rowid(), input))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Overwrites every mutable column. Returns `false` when no row has `id`.
    pub async fn update(&self, id: i64, input: ExerciseInput) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE gym_exercise
                 SET name = ?, muscle_group = ?, weights = ?, sets = ?, reps = ?, day_of_week = ?
                 WHERE id = ?",
                rusqlite::params![
                    input.name,
                    input.muscle_group,
                    input.weights,
                    input.sets,
                    input.reps,
                    input.day_of_week,
                    id
                ],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM gym_exercise WHERE id = ?", [id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
