use std::sync::Arc;

use tokio::sync::RwLock;

use cultivar_auth::app_state::AppState;
use cultivar_auth::services::{HashmapUserStore, NoopTokenVersionStore, TokenService};
use cultivar_auth::utils::Config;
use cultivar_auth::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let token_service = Arc::new(TokenService::new(config));
    let user_store = Arc::new(RwLock::new(HashmapUserStore::default()));

    let app_state = AppState::new(user_store, token_service, Arc::new(NoopTokenVersionStore));

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
