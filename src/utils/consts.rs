// Fixed token scoping strings. Both access and refresh tokens carry the same
// issuer/audience pair, and verification requires an exact match.
pub const JWT_ISSUER: &str = "cultivar-erp";
pub const JWT_AUDIENCE: &str = "cultivar-erp-api";

pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 900; // 15 minutes
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 604_800; // 7 days

pub mod env {
    pub const ACCESS_TOKEN_SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";
    pub const REFRESH_TOKEN_SECRET_ENV_VAR: &str = "REFRESH_TOKEN_SECRET";
    pub const ACCESS_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS_ENV_VAR: &str = "REFRESH_TTL_SECONDS";
}
