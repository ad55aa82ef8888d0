pub mod auth;
pub mod board_store;

pub use auth::{AuthSession, AuthState, CredentialVerifier, StaticCredentials, AUTH_KEY};
pub use board_store::BoardStore;
