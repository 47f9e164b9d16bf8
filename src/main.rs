use crate::utils::startup_utils;

mod error;
mod api;
mod services;
mod models;
mod utils;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = startup_utils::AppConfig::from_env();
    let store = startup_utils::get_store(&config).await;
    let state = startup_utils::get_app_state(store);

    startup_utils::create_server(&config, state)
        .await;
}
