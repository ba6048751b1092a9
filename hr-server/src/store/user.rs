//! User Store
//!
//! Holds credentials as bcrypt hashes only. Plaintext passwords are hashed
//! by [`crate::auth::credential`] before anything reaches this store.

use chrono::{DateTime, Utc};
use shared::models::{Role, User};

use super::{Entity, MemoryStore};
use crate::auth::credential::hash_password;
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

pub type UserStore = MemoryStore<User>;

/// Seed administrator credentials
pub const SEED_ADMIN_USERNAME: &str = "admin";
pub const SEED_ADMIN_PASSWORD: &str = "admin123";

/// New user with an already hashed password
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub role: Role,
}

/// Store-level user patch; a password can only arrive as a hash
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
}

impl Entity for User {
    type Create = NewUser;
    type Patch = UserPatch;

    const RESOURCE: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn build(id: i64, data: NewUser, now: DateTime<Utc>) -> AppResult<Self> {
        Ok(Self {
            id,
            username: data.username,
            password_hash: data.password_hash,
            email: data.email,
            role: data.role,
            created_at: now,
        })
    }

    fn apply(&mut self, patch: UserPatch, _now: DateTime<Utc>) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(hash) = patch.password_hash {
            self.password_hash = hash;
        }
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.username, "username", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        if self.password_hash.is_empty() {
            return Err(AppError::internal("User has no password hash"));
        }
        Ok(())
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn not_found(id: i64) -> AppError {
        AppError::with_message(ErrorCode::UserNotFound, format!("User {} not found", id))
    }

    fn conflict(username: &str) -> AppError {
        AppError::with_message(
            ErrorCode::UsernameExists,
            format!("Username '{}' already exists", username),
        )
        .with_detail("field", "username")
    }
}

impl UserStore {
    /// Store holding the seed administrator
    ///
    /// Fails only if hashing the seed password fails.
    pub fn seeded() -> AppResult<Self> {
        let admin = User {
            id: 1,
            username: SEED_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(SEED_ADMIN_PASSWORD)?,
            email: "admin@hr.local".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        Ok(Self::with_rows(vec![admin]))
    }

    /// Exact, case-sensitive username lookup
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.find_where(|u| u.username == username).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$2b$10$placeholder".to_string(),
            email: format!("{username}@hr.local"),
            role: Role::Hr,
        }
    }

    #[test]
    fn test_seed_admin_password_verifies() {
        let store = UserStore::seeded().unwrap();
        let admin = store.find_by_username("admin").unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.role, Role::Admin);
        assert!(bcrypt::verify(SEED_ADMIN_PASSWORD, &admin.password_hash).unwrap());
    }

    #[test]
    fn test_username_is_unique_and_case_sensitive() {
        let store = UserStore::new();
        store.create(new_user("alice")).unwrap();

        let err = store.create(new_user("alice")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UsernameExists);
        assert_eq!(store.len(), 1);

        store.create(new_user("Alice")).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_username("ALICE").is_none());
    }

    #[test]
    fn test_rename_onto_existing_username_fails() {
        let store = UserStore::new();
        let alice = store.create(new_user("alice")).unwrap();
        store.create(new_user("bob")).unwrap();

        let err = store
            .update(
                alice.id,
                UserPatch {
                    username: Some("bob".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UsernameExists);
        assert_eq!(store.find_by_id(alice.id).unwrap().username, "alice");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let store = UserStore::new();
        let err = store
            .create(NewUser {
                email: "nope".to_string(),
                ..new_user("carol")
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_user() {
        let store = UserStore::new();
        let err = store.remove(9).unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
