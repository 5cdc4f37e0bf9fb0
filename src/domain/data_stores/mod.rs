pub mod token_version_store;
pub mod user_store;

pub use token_version_store::*;
pub use user_store::*;
