use super::email::Email;

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub user_id: String,
    pub email: Email,
    pub role: Option<String>,
}

impl User {
    pub fn new(user_id: String, email: Email, role: Option<String>) -> Self {
        User {
            user_id,
            email,
            role,
        }
    }
}
