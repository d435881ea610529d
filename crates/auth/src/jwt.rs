//! JWT validation, issuing, and token extraction helpers

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::backend::Authenticator;
use crate::claims::JoblyClaims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Validates HS256 tokens against the configured secret, issuer and audience
#[derive(Debug, Clone)]
pub struct JwtAuthenticator {
    config: AuthConfig,
}

impl JwtAuthenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;
        Ok(AuthContext::new(claims.username, claims.is_admin))
    }
}

/// Validate a JWT and return its claims
pub(crate) fn validate_jwt_token(token: &str, config: &AuthConfig) -> Result<JoblyClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // jsonwebtoken only checks iss/aud when present, so configured ones must be required
    let mut required = vec!["exp"];

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
        required.push("aud");
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
        required.push("iss");
    }

    validation.set_required_spec_claims(&required);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<JoblyClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Issue a signed token for `username`, valid for `ttl`
pub fn create_token(
    config: &AuthConfig,
    username: &str,
    is_admin: bool,
    ttl: Duration,
) -> jsonwebtoken::errors::Result<String> {
    let now = Utc::now();
    let claims = JoblyClaims {
        username: username.to_string(),
        is_admin,
        iat: now.timestamp() as u64,
        exp: (now + ttl).timestamp() as u64,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
