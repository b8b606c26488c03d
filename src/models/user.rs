//! User model
//!
//! A participant in expense sharing. Identity is the `user_id` alone;
//! display fields may change without affecting settlement results.

use serde::{Deserialize, Serialize};

/// A participant in expense sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier; the only field that carries identity
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Optional avatar URL
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl User {
    /// Creates a user without a profile image.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            profile_image: None,
        }
    }

    /// Identity comparison by `user_id` only.
    pub fn is_same(&self, other: &User) -> bool {
        self.user_id == other.user_id
    }
}
