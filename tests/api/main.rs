mod helpers;
mod login;
mod refresh_token;
mod verify_token;
