//! User entity - an account that can sign in

use chrono::{DateTime, Utc};

use crate::value_objects::{display_name, UserId};

/// User account. The username is the email address given at signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full name as shown to other users
    pub fn full_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }
}

/// Values needed to create a user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    /// Signup uses the email address as the username
    pub fn from_email(email: String, first_name: String, last_name: String) -> Self {
        Self {
            username: email.clone(),
            email,
            first_name,
            last_name,
        }
    }
}
