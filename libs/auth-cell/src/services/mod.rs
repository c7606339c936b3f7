pub mod authenticator;
pub mod session;

pub use authenticator::{Authenticator, StaticCredentialAuthenticator};
pub use session::AuthService;
