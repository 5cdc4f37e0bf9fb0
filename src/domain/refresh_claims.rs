use serde::{Deserialize, Serialize};

/// Version stamped into refresh tokens when no version-tracking store is
/// wired in. Bumping a user's stored version (e.g. on password change) is
/// the intended path to invalidating all of their outstanding refresh
/// tokens; see `TokenVersionStore`.
pub const INITIAL_TOKEN_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,        // Subject (user ID)
    pub email: String,      // Account email
    pub token_version: u32, // Counter for bulk invalidation
    pub iss: String,        // Issuer
    pub aud: String,        // Audience
    pub iat: usize,         // Issued at time
    pub exp: usize,         // Expiration time
}
