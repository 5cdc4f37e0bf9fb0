use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use routes::{login, me, refresh_token, verify_token};
use std::{
    error::Error,
    future::{Future, IntoFuture},
    pin::Pin,
};
use tokio::net::TcpListener;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(login::login))
        .route("/refresh-token", post(refresh_token::refresh_token))
        .route("/verify-token", post(verify_token::verify_token))
        .route("/me", get(me::me))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        let http_future = axum::serve(listener, router.into_make_service()).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
