pub mod exercise;
pub mod from_row;

pub use exercise::{Exercise, ExerciseFilter, ExerciseInput, ExerciseSelection};
pub use from_row::FromSqliteRow;
