//! Credential record domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Role, User};

/// A registered account: the user profile plus its password hash.
///
/// `password_hash` is an Argon2id PHC string; plaintext passwords are never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub favorites: Vec<String>,
    pub saved_searches: Vec<serde_json::Value>,
    pub role: Role,
    /// Real estate license number, agents only
    pub license_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Build the credential record for a freshly registered user
    pub fn from_user(user: &User, password_hash: impl Into<String>) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            password_hash: password_hash.into(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            favorites: user.favorites.clone(),
            saved_searches: user.saved_searches.clone(),
            role: user.role,
            license_number: None,
            created_at: user.created_at,
        }
    }

    /// The session view of this record
    pub fn to_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            favorites: self.favorites.clone(),
            saved_searches: self.saved_searches.clone(),
            created_at: self.created_at,
            role: self.role,
        }
    }

    /// Copy the mutable profile fields of a session user into this record
    pub fn sync_profile(&mut self, user: &User) {
        self.email = user.email.clone();
        self.name = user.name.clone();
        self.phone = user.phone.clone();
        self.favorites = user.favorites.clone();
        self.saved_searches = user.saved_searches.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trips_through_credential() {
        let mut user = User::new("u1", "a@b.com", "Ann", Role::User);
        user.favorites.push("2".to_string());
        let cred = Credential::from_user(&user, "$argon2id$...");

        assert_eq!(cred.to_user(), user);
        assert!(cred.license_number.is_none());
    }
}
