//! Pluggable authentication backend
//!
//! Route layers depend on the `Authenticator` trait, not on a concrete token
//! format, so tests can swap in `mock::MockAuthenticator`.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::JwtAuthenticator;

/// Resolves a bearer token to the caller's identity
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError>;
}

/// Shared authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    inner: Arc<dyn Authenticator>,
}

impl AuthBackend {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self {
            inner: Arc::new(authenticator),
        }
    }

    /// Backend validating HS256 JWTs signed with the configured secret
    pub fn jwt(config: AuthConfig) -> Self {
        Self::new(JwtAuthenticator::new(config))
    }

    pub(crate) async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        self.inner.authenticate(token).await
    }
}

impl std::fmt::Debug for AuthBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthBackend").finish_non_exhaustive()
    }
}
