//! User domain type

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Authenticated user
///
/// Login responds with only `id` and `name`; the full profile comes from
/// `GET /api/user/me`, so the extra fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address (absent in the login response)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Profile picture as a data URI (null until uploaded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}
