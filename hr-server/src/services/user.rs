//! User Service

use std::sync::Arc;

use shared::models::{PublicUser, UserUpdate};

use crate::auth::credential::{hash_password, validate_password};
use crate::store::{UserPatch, UserStore};
use crate::utils::AppResult;

/// User updates; a new password is hashed before it reaches the store
#[derive(Clone)]
pub struct UserService {
    users: Arc<UserStore>,
}

impl UserService {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }

    pub fn list(&self) -> Vec<PublicUser> {
        self.users.find_all().into_iter().map(PublicUser::from).collect()
    }

    pub fn update(&self, id: i64, update: UserUpdate) -> AppResult<PublicUser> {
        let password_hash = match update.password.as_deref() {
            Some(plain) => {
                validate_password(plain)?;
                Some(hash_password(plain)?)
            }
            None => None,
        };

        let user = self.users.update(
            id,
            UserPatch {
                username: update.username,
                email: update.email,
                role: update.role,
                password_hash,
            },
        )?;

        tracing::info!(user_id = user.id, password_changed = update.password.is_some(), "User updated");
        Ok(PublicUser::from(user))
    }
}
