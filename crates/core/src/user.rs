//! The user model family: one concept, three shapes.
//!
//! - [`UserCreate`] is what a client submits. It carries a plaintext password.
//! - [`UserRecord`] is what gets stored. It carries a hash, never the password.
//! - [`UserPublic`] is what goes back out. It carries no password material.
//!
//! The conversions are deliberately lossy in one direction: there is no path
//! from a stored or public shape back to a plaintext password.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Incoming registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserCreate {
    pub fn validate(&self) -> DomainResult<()> {
        if self.username.is_empty() {
            return Err(DomainError::validation("username: must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email: not a valid email address"));
        }
        Ok(())
    }
}

/// Stored shape. Holds a password hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserRecord {
    pub fn from_create(create: &UserCreate) -> Self {
        Self {
            username: create.username.clone(),
            hashed_password: demo_password_hash(&create.password),
            email: create.email.clone(),
            full_name: create.full_name.clone(),
        }
    }
}

/// Outward-facing shape. No password material at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPublic {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl From<&UserRecord> for UserPublic {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            full_name: record.full_name.clone(),
        }
    }
}

// Stand-in hasher so the stored shape is visibly not the input. A real
// deployment would use a KDF; the tour only needs the shapes to differ.
fn demo_password_hash(raw: &str) -> String {
    format!("supersecret{raw}")
}

/// In-memory user store for the response-shaping chapter.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<Vec<UserRecord>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, hash, and store. Returns the stored record.
    pub fn save(&self, create: &UserCreate) -> DomainResult<UserRecord> {
        create.validate()?;
        let record = UserRecord::from_create(create);
        let mut users = self
            .users
            .write()
            .map_err(|e| DomainError::internal(format!("user store poisoned: {e}")))?;
        users.retain(|u| u.username != record.username);
        users.push(record.clone());
        Ok(record)
    }

    pub fn find(&self, username: &str) -> DomainResult<Option<UserRecord>> {
        let users = self
            .users
            .read()
            .map_err(|e| DomainError::internal(format!("user store poisoned: {e}")))?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> UserCreate {
        UserCreate {
            username: "john".to_string(),
            password: "secret".to_string(),
            email: "john.doe@example.com".to_string(),
            full_name: None,
        }
    }

    #[test]
    fn record_holds_hash_not_password() {
        let record = UserRecord::from_create(&create());
        assert_ne!(record.hashed_password, "secret");
        assert_eq!(record.hashed_password, "supersecretsecret");
    }

    #[test]
    fn public_shape_has_no_password_fields() {
        let record = UserRecord::from_create(&create());
        let public = UserPublic::from(&record);
        let json = serde_json::to_value(&public).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("hashed_password"));
        assert_eq!(object["username"], "john");
    }

    #[test]
    fn invalid_email_rejected() {
        let mut bad = create();
        bad.email = "not-an-email".to_string();
        assert!(UserDirectory::new().save(&bad).is_err());
    }

    #[test]
    fn save_then_find() {
        let directory = UserDirectory::new();
        directory.save(&create()).unwrap();
        let found = directory.find("john").unwrap().unwrap();
        assert_eq!(found.email, "john.doe@example.com");
        assert!(directory.find("jane").unwrap().is_none());
    }

    #[test]
    fn save_replaces_existing_username() {
        let directory = UserDirectory::new();
        directory.save(&create()).unwrap();
        let mut updated = create();
        updated.email = "john@example.org".to_string();
        directory.save(&updated).unwrap();
        let found = directory.find("john").unwrap().unwrap();
        assert_eq!(found.email, "john@example.org");
    }
}
