use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct MeResponse {
    pub user_id: String,
    pub email: String,
    pub role: Option<String>,
}
