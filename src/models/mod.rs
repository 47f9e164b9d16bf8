pub mod dashboard;
pub mod mood;
pub mod nutrition;
pub mod sleep;
pub mod workout;
