use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::{get, post}, extract::FromRef};

use crate::api::dashboard::read_dashboard_stats;
use crate::api::health::health_check;
use crate::api::mood::{complete_practice, create_mood_entry, read_mood_data, read_practices};
use crate::api::nutrition::{create_meal, read_meals, read_summary, search_foods};
use crate::api::sleep::{create_sleep_journal_entry, create_sleep_night, read_sleep_data, read_sleep_journal};
use crate::api::workouts::{create_workout, delete_workout, read_exercises, read_workout, read_workout_stats, read_workouts, update_workout};
use crate::services::dashboard_controller::DashboardController;
use crate::services::mood_controller::MoodController;
use crate::services::nutrition_controller::NutritionController;
use crate::services::sleep_controller::SleepController;
use crate::services::store::MemoryStore;
use crate::services::workout_controller::WorkoutController;
use crate::utils::seed_utils;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store_latency_ms: u64,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let store_latency_ms = std::env::var("STORE_LATENCY_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|value| value != "false")
            .unwrap_or(true);

        AppConfig {
            bind_addr,
            store_latency_ms,
            seed_demo_data,
        }
    }
}

pub async fn get_store(config: &AppConfig) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new(Duration::from_millis(config.store_latency_ms)));

    if config.seed_demo_data {
        seed_utils::seed_demo_data(&store).await;
    }

    store
}

pub fn get_app_state(store: Arc<MemoryStore>) -> AppState {
    AppState {
        workout_controller: Arc::new(WorkoutController::new(Arc::clone(&store))),
        nutrition_controller: Arc::new(NutritionController::new(Arc::clone(&store))),
        sleep_controller: Arc::new(SleepController::new(Arc::clone(&store))),
        mood_controller: Arc::new(MoodController::new(Arc::clone(&store))),
        dashboard_controller: Arc::new(DashboardController::new(Arc::clone(&store))),
        store,
    }
}

// AppState holds the store and one controller per domain for routing
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub workout_controller: Arc<WorkoutController>,
    pub nutrition_controller: Arc<NutritionController>,
    pub sleep_controller: Arc<SleepController>,
    pub mood_controller: Arc<MoodController>,
    pub dashboard_controller: Arc<DashboardController>,
}

// Allow extracting each controller from AppState
impl FromRef<AppState> for Arc<MemoryStore> {
    fn from_ref(state: &AppState) -> Arc<MemoryStore> {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<WorkoutController> {
    fn from_ref(state: &AppState) -> Arc<WorkoutController> {
        state.workout_controller.clone()
    }
}

impl FromRef<AppState> for Arc<NutritionController> {
    fn from_ref(state: &AppState) -> Arc<NutritionController> {
        state.nutrition_controller.clone()
    }
}

impl FromRef<AppState> for Arc<SleepController> {
    fn from_ref(state: &AppState) -> Arc<SleepController> {
        state.sleep_controller.clone()
    }
}

impl FromRef<AppState> for Arc<MoodController> {
    fn from_ref(state: &AppState) -> Arc<MoodController> {
        state.mood_controller.clone()
    }
}

impl FromRef<AppState> for Arc<DashboardController> {
    fn from_ref(state: &AppState) -> Arc<DashboardController> {
        state.dashboard_controller.clone()
    }
}

fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/fitness/workouts", get(read_workouts).post(create_workout))
        .route(
            "/fitness/workouts/{id}",
            get(read_workout).put(update_workout).delete(delete_workout),
        )
        .route("/fitness/stats", get(read_workout_stats))
        .route("/fitness/exercises", get(read_exercises))
        .route("/nutrition/meals", get(read_meals).post(create_meal))
        .route("/nutrition/summary", get(read_summary))
        .route("/nutrition/foods/search", get(search_foods))
        .route("/sleep", get(read_sleep_data).post(create_sleep_night))
        .route(
            "/sleep/journal",
            get(read_sleep_journal).post(create_sleep_journal_entry),
        )
        .route("/mental/mood", get(read_mood_data).post(create_mood_entry))
        .route("/mental/practices", get(read_practices))
        .route("/mental/practices/{id}/complete", post(complete_practice))
        .route("/dashboard/stats", get(read_dashboard_stats))
        .with_state(state)
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Shutdown signal received, starting graceful shutdown");
}

pub async fn create_server(config: &AppConfig, state: AppState) {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind TCP listener.");

    println!("Server running on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server.");
}
