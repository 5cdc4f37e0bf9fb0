pub mod access_claims;
pub mod data_stores;
pub mod email;
pub mod issued_tokens;
pub mod login_request;
pub mod login_response;
pub mod me_response;
pub mod password;
pub mod refresh_claims;
pub mod refresh_request;
pub mod refresh_response;
mod user;
pub mod verify_token_request;

pub use access_claims::*;
pub use data_stores::*;
pub use email::*;
pub use issued_tokens::*;
pub use login_request::*;
pub use login_response::*;
pub use me_response::*;
pub use password::*;
pub use refresh_claims::*;
pub use refresh_request::*;
pub use refresh_response::*;
pub use user::*;
pub use verify_token_request::*;
