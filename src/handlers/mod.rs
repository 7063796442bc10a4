pub mod exercises;
pub mod health;
