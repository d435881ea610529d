//! In-memory authenticator for tests
//!
//! Maps fixed token strings to identities so route tests can exercise
//! authorization without minting JWTs.

use std::collections::HashMap;

use crate::backend::Authenticator;
use crate::context::AuthContext;
use crate::error::AuthError;

#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator {
    tokens: HashMap<String, AuthContext>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as an admin named `username`
    pub fn with_admin(mut self, token: &str, username: &str) -> Self {
        self.tokens
            .insert(token.to_string(), AuthContext::new(username, true));
        self
    }

    /// Accept `token` as a regular user named `username`
    pub fn with_user(mut self, token: &str, username: &str) -> Self {
        self.tokens
            .insert(token.to_string(), AuthContext::new(username, false));
        self
    }
}

#[async_trait::async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
