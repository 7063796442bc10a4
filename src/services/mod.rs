//! Business logic between the HTTP handlers and the repositories.

pub mod exercise_service;

pub use exercise_service::ExerciseService;
