pub mod dashboard;
pub mod health;
pub mod mood;
pub mod nutrition;
pub mod sleep;
pub mod workouts;
