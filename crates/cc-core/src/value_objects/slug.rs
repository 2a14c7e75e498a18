//! URL slug and display-name derivation for user profiles

use crate::value_objects::UserId;

/// Derive a profile's URL slug: lowercase first + last name followed by the user id.
///
/// No separator is inserted, so "Ann Bo" with id 12 and "Annb O" with id 12
/// would collide; the id suffix keeps slugs unique as long as ids are.
pub fn derive_url_slug(first_name: &str, last_name: &str, user_id: UserId) -> String {
    format!("{first_name}{last_name}").to_lowercase() + &user_id.to_string()
}

/// Display name shown on profiles
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
