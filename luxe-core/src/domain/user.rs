//! User domain model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::result::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "agent" => Ok(Role::Agent),
            other => Err(Error::validation(format!("unknown role: {}", other))),
        }
    }
}

/// The authenticated identity held by a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Placeholder, nothing writes saved searches yet
    #[serde(default)]
    pub saved_searches: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            phone: None,
            favorites: Vec::new(),
            saved_searches: Vec::new(),
            created_at: Utc::now(),
            role,
        }
    }

    pub fn is_agent(&self) -> bool {
        self.role == Role::Agent
    }

    pub fn is_favorite(&self, property_id: &str) -> bool {
        self.favorites.iter().any(|id| id == property_id)
    }

    /// Add a favorite, returns false if it was already present
    pub fn add_favorite(&mut self, property_id: &str) -> bool {
        if self.is_favorite(property_id) {
            return false;
        }
        self.favorites.push(property_id.to_string());
        true
    }

    /// Remove a favorite, returns false if it was not present
    pub fn remove_favorite(&mut self, property_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|id| id != property_id);
        self.favorites.len() != before
    }

    /// Merge a partial profile update into this user
    pub fn apply(&mut self, update: &UserUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = if phone.trim().is_empty() {
                None
            } else {
                Some(phone.clone())
            };
        }
    }
}

/// Partial profile update; `None` leaves the field untouched.
/// An empty phone clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_have_set_semantics() {
        let mut user = User::new("u1", "a@b.com", "Ann", Role::User);
        assert!(user.add_favorite("3"));
        assert!(!user.add_favorite("3"));
        assert_eq!(user.favorites, vec!["3".to_string()]);

        assert!(user.remove_favorite("3"));
        assert!(!user.remove_favorite("3"));
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut user = User::new("u1", "a@b.com", "Ann", Role::User);
        user.phone = Some("555".to_string());

        user.apply(&UserUpdate {
            name: Some("Annie".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name, "Annie");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.phone.as_deref(), Some("555"));

        user.apply(&UserUpdate {
            phone: Some(String::new()),
            ..Default::default()
        });
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_user_json_uses_camel_case() {
        let user = User::new("u1", "a@b.com", "Ann", Role::Agent);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("savedSearches").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["role"], "agent");
    }
}
