/// Lookup for the current refresh-token version of a user.
///
/// Refresh tokens carry a `token_version` claim so that all outstanding
/// refresh tokens for a user can be invalidated at once by bumping a stored
/// counter (e.g. on password change). No storage-backed implementation
/// exists yet; the refresh flow consults this hook through
/// `NoopTokenVersionStore`, which accepts every version.
#[async_trait::async_trait]
pub trait TokenVersionStore: Send + Sync {
    /// True when `version` is still the current version for `user_id`.
    async fn is_current(&self, user_id: &str, version: u32) -> bool;
}
