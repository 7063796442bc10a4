use rusqlite::Row;
use serde::{Deserialize, Deserializer, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
    pub weights: i32,
    pub sets: i32,
    pub reps: i32,
    pub day_of_week: String,
}

impl Exercise {
    pub fn from_input(id: i64, input: ExerciseInput) -> Self {
        Self {
            id,
            name: input.name,
            muscle_group: input.muscle_group,
            weights: input.weights,
            sets: input.sets,
            reps: input.reps,
            day_of_week: input.day_of_week,
        }
    }
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group: row.get("muscle_group")?,
            weights: row.get("weights")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            day_of_week: row.get("day_of_week")?,
        })
    }
}

/// Request body for create and update.
///
/// Any `id` in the body is ignored. Missing or `null` fields fall back to
/// their defaults, and an update writes those defaults over the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub muscle_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weights: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub sets: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub reps: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub day_of_week: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Query string of `GET /api/exercises`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFilter {
    pub day: Option<String>,
    pub muscle_group: Option<String>,
}

/// Which single scan a listing resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseSelection {
    Day(String),
    MuscleGroup(String),
    All,
}

impl ExerciseFilter {
    pub fn new(day: Option<&str>, muscle_group: Option<&str>) -> Self {
        Self {
            day: day.map(str::to_string),
            muscle_group: muscle_group.map(str::to_string),
        }
    }

    /// Day wins over muscle group; empty values count as absent.
    pub fn selection(&self) -> ExerciseSelection {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(day) = present(&self.day) {
            ExerciseSelection::Day(day)
        } else if let Some(muscle_group) = present(&self.muscle_group) {
            ExerciseSelection::MuscleGroup(muscle_group)
        } else {
            ExerciseSelection::All
        }
    }
}
