#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}
