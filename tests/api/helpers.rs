use reqwest::{Client, Response};
use std::sync::Arc;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use cultivar_auth::app_state::AppState;
use cultivar_auth::domain::{
    Email, LoginRequestBody, Password, RefreshRequestBody, User, UserStore,
    VerifyTokenRequestBody,
};
use cultivar_auth::services::{HashmapUserStore, NoopTokenVersionStore, TokenService};
use cultivar_auth::utils::Config;
use cultivar_auth::Application;

pub const TEST_PASSWORD: &str = "Password123!";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_store: Arc<RwLock<HashmapUserStore>>,
    pub token_service: Arc<TokenService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(Config::new(
            "test-access-secret-0123456789",
            "test-refresh-secret-0123456789",
            60,
            300,
        ));
        let token_service = Arc::new(TokenService::new(config));
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));

        let app_state = AppState::new(
            user_store.clone(),
            token_service.clone(),
            Arc::new(NoopTokenVersionStore),
        );

        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("failed to build test app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            user_store,
            token_service,
        }
    }

    /// Insert a user directly into the store; returns the generated user id.
    pub async fn seed_user(&self, email: &str, password: &str, role: Option<&str>) -> String {
        let user_id = Uuid::new_v4().to_string();
        let email = Email::parse(email.to_owned()).expect("seed email should be valid");
        let password = Password::parse(password.to_owned()).expect("seed password should be valid");
        let user = User::new(user_id.clone(), email, role.map(str::to_string));

        self.user_store
            .write()
            .await
            .add_user(user, password)
            .await
            .expect("failed to seed user");

        user_id
    }

    pub async fn login(&self, email: String, password: String) -> Response {
        let body = LoginRequestBody { email, password };

        self.http_client
            .post(&format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn refresh_token(&self, refresh_token: String) -> Response {
        let body = RefreshRequestBody { refresh_token };

        self.http_client
            .post(&format!("{}/refresh-token", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn verify_token(&self, token: String) -> Response {
        let body = VerifyTokenRequestBody { token };

        self.http_client
            .post(&format!("{}/verify-token", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute verify-token request.")
    }

    pub async fn me(&self, authorization: Option<&str>) -> Response {
        let mut request = self.http_client.get(&format!("{}/me", &self.address));
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }

        request.send().await.expect("Failed to execute me request.")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
