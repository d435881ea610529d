//! Authentication middleware for the Jobly API
//!
//! Provides bearer-token authentication behind the `Authenticator` trait, a
//! JWT implementation, a mock for tests, and axum extractors that work with any
//! domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
pub mod jwt;
pub mod mock;

pub use backend::{AuthBackend, Authenticator};
pub use claims::JoblyClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser};
pub use jwt::JwtAuthenticator;
