mod auth;
mod login;
mod refresh_token;
mod verify_token;

pub use auth::*;
pub use login::*;
pub use refresh_token::*;
pub use verify_token::*;
