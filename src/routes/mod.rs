pub(crate) mod login;
pub(crate) mod me;
pub(crate) mod refresh_token;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use login::*;
pub use me::*;
pub use refresh_token::*;
pub use verify_token::*;
