//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by Jobly session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoblyClaims {
    /// Subject (username)
    pub username: String,
    /// Grants access to admin-only routes
    #[serde(default)]
    pub is_admin: bool,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}
