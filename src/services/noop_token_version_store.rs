use crate::domain::TokenVersionStore;

/// Pass-through `TokenVersionStore`: no version counters are persisted yet,
/// so every presented version is accepted.
#[derive(Debug, Default, Clone)]
pub struct NoopTokenVersionStore;

#[async_trait::async_trait]
impl TokenVersionStore for NoopTokenVersionStore {
    async fn is_current(&self, _user_id: &str, _version: u32) -> bool {
        true
    }
}
