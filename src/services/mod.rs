pub mod dashboard_controller;
pub mod mood_controller;
pub mod nutrition_controller;
pub mod sleep_controller;
pub mod store;
pub mod workout_controller;
