//! Token issuance and verification service.
//!
//! This module provides the `TokenService`, which coordinates:
//! - Creation of short-lived access (JWT) tokens
//! - Creation of longer-lived refresh (JWT) tokens
//! - Verification (signature + issuer/audience + expiry) of both kinds
//!
//! Security model:
//! 1. Access and refresh tokens are signed with distinct secrets; a token
//!    valid under one secret never validates under the other.
//! 2. Both kinds embed the fixed issuer/audience pair, matched exactly on
//!    verification.
//! 3. Verification failures are collapsed into a single `InvalidToken`
//!    error at the boundary so callers cannot tell which check failed; the
//!    detailed reason is only logged at debug level.
//!
//! Concurrency:
//! - The service holds nothing but an immutable `Arc<Config>`; every method
//!   is synchronous and safe to call from any number of tasks.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{AccessClaims, IssuedTokens, RefreshClaims, INITIAL_TOKEN_VERSION};
use crate::utils::consts::{JWT_AUDIENCE, JWT_ISSUER};
use crate::utils::Config;

#[derive(Clone)]
/// Facade for minting and checking access/refresh tokens.
///
/// Typical lifecycle:
/// 1. Login -> `issue_token_pair`
/// 2. Every protected request -> `verify_access_token`
/// 3. Access token expired -> client presents refresh token,
///    `verify_refresh_token` + a fresh pair
pub struct TokenService {
    config: Arc<Config>,
}

#[derive(Debug)]
pub enum IssueError {
    /// The signing secret for the requested token kind is unset or empty.
    MissingSecret,
    Signing(jsonwebtoken::errors::Error),
}

#[derive(Debug, PartialEq)]
pub enum AccessError {
    MissingSecret,
    InvalidToken,
}

#[derive(Debug, PartialEq)]
pub enum RefreshError {
    MissingSecret,
    InvalidToken,
}

// Internal verification failure detail. Kept for logging only; callers see
// the single InvalidToken variant.
#[derive(Debug)]
enum VerifyFailure {
    Malformed,
    Expired,
    BadSignature,
    IssuerMismatch,
    AudienceMismatch,
    Other,
}

impl From<&jsonwebtoken::errors::Error> for VerifyFailure {
    fn from(err: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => VerifyFailure::Expired,
            ErrorKind::InvalidSignature => VerifyFailure::BadSignature,
            ErrorKind::InvalidIssuer => VerifyFailure::IssuerMismatch,
            ErrorKind::InvalidAudience => VerifyFailure::AudienceMismatch,
            ErrorKind::InvalidToken
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => VerifyFailure::Malformed,
            _ => VerifyFailure::Other,
        }
    }
}

impl TokenService {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Sign a short-lived access token for a user.
    ///
    /// Embeds the user id, email and optional role alongside the fixed
    /// issuer/audience pair; expiry is now + the configured access TTL.
    pub fn issue_access_token(
        &self,
        user_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> Result<String, IssueError> {
        let secret = self.config.access_token_secret();
        if secret.is_empty() {
            return Err(IssueError::MissingSecret);
        }

        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_ttl_seconds());

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.map(str::to_string),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        sign(&claims, secret).map_err(IssueError::Signing)
    }

    /// Sign a refresh token for a user, stamped with `token_version`.
    ///
    /// Same mechanics as access tokens but signed with the refresh secret
    /// and the (much longer) refresh TTL.
    pub fn issue_refresh_token(
        &self,
        user_id: &str,
        email: &str,
        token_version: u32,
    ) -> Result<String, IssueError> {
        let secret = self.config.refresh_token_secret();
        if secret.is_empty() {
            return Err(IssueError::MissingSecret);
        }

        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.refresh_ttl_seconds());

        let claims = RefreshClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            token_version,
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        sign(&claims, secret).map_err(IssueError::Signing)
    }

    /// Mint a fresh access + refresh pair for a user.
    ///
    /// The refresh side is stamped with `INITIAL_TOKEN_VERSION`; flows that
    /// rotate an existing session carry the presented version forward by
    /// calling the two issue methods directly.
    pub fn issue_token_pair(
        &self,
        user_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> Result<IssuedTokens, IssueError> {
        let access_token = self.issue_access_token(user_id, email, role)?;
        let refresh_token = self.issue_refresh_token(user_id, email, INITIAL_TOKEN_VERSION)?;

        Ok(IssuedTokens {
            user_id: user_id.to_string(),
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token and recover its claims.
    ///
    /// Checks signature (access secret), issuer, audience and expiry. Any
    /// failure collapses to `AccessError::InvalidToken`.
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AccessError> {
        let secret = self.config.access_token_secret();
        if secret.is_empty() {
            return Err(AccessError::MissingSecret);
        }

        decode_claims::<AccessClaims>(token, secret).map_err(|err| {
            log::debug!("access token rejected: {:?}", VerifyFailure::from(&err));
            AccessError::InvalidToken
        })
    }

    /// Verify a refresh token and recover its claims.
    ///
    /// Identical mechanics against the refresh secret. The embedded
    /// `token_version` is returned to the caller; checking it against a
    /// stored value is the job of a `TokenVersionStore`.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, RefreshError> {
        let secret = self.config.refresh_token_secret();
        if secret.is_empty() {
            return Err(RefreshError::MissingSecret);
        }

        decode_claims::<RefreshClaims>(token, secret).map_err(|err| {
            log::debug!("refresh token rejected: {:?}", VerifyFailure::from(&err));
            RefreshError::InvalidToken
        })
    }
}

fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn decode_claims<T: DeserializeOwned>(
    token: &str,
    secret: &str,
) -> Result<T, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    validation.set_audience(&[JWT_AUDIENCE]);
    validation.leeway = 30;

    decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
