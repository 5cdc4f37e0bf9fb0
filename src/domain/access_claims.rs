use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,   // Subject (user ID)
    pub email: String, // Account email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>, // Permission hint for outer authorization checks
    pub iss: String,   // Issuer
    pub aud: String,   // Audience
    pub iat: usize,    // Issued at time
    pub exp: usize,    // Expiration time
}
