use std::collections::HashMap;

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::domain::{Email, Password, User, UserStore, UserStoreError};

struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory `UserStore` keyed by email. Passwords are stored as Argon2 PHC
/// strings, never in plain text.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<String, StoredUser>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
        }
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User, password: Password) -> Result<(), UserStoreError> {
        let key = user.email.as_ref().to_owned();
        if self.users.contains_key(&key) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_ref().as_bytes(), &salt)
            .map_err(|_| UserStoreError::UnexpectedError)?
            .to_string();

        self.users.insert(
            key,
            StoredUser {
                user,
                password_hash,
            },
        );
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .get(email.as_ref())
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let stored = self
            .users
            .get(email.as_ref())
            .ok_or(UserStoreError::UserNotFound)?;

        let parsed_hash = PasswordHash::new(&stored.password_hash)
            .map_err(|_| UserStoreError::UnexpectedError)?;

        Argon2::default()
            .verify_password(password.as_ref().as_bytes(), &parsed_hash)
            .map_err(|_| UserStoreError::InvalidCredentials)?;

        Ok(stored.user.clone())
    }
}
