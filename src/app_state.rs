use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{TokenVersionStore, UserStore};
use crate::services::TokenService;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TokenServiceType = Arc<TokenService>;
pub type TokenVersionStoreType = Arc<dyn TokenVersionStore>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_service: TokenServiceType,
    pub token_version_store: TokenVersionStoreType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        token_service: TokenServiceType,
        token_version_store: TokenVersionStoreType,
    ) -> Self {
        Self {
            user_store,
            token_service,
            token_version_store,
        }
    }
}
