//! Credential Service
//!
//! Password hashing, registration, authentication and login.
//! This module is the only path by which a password enters the user store.

use std::sync::{Arc, LazyLock};

use shared::client::{LoginResponse, RegisterRequest, UserInfo};
use shared::models::PublicUser;

use crate::auth::JwtService;
use crate::security_log;
use crate::store::{NewUser, UserStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_BYTES, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// bcrypt work factor for stored passwords
pub const BCRYPT_COST: u32 = 10;

/// Verified against when the username is unknown, so both failure paths
/// cost one bcrypt verification.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| bcrypt::hash("dummy-password", BCRYPT_COST).unwrap_or_default());

/// Hash a plaintext password for storage
pub fn hash_password(plain: &str) -> AppResult<String> {
    bcrypt::hash(plain, BCRYPT_COST)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored hash
///
/// A malformed hash counts as a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match bcrypt::verify(plain, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::error!(error = %e, "Password verification failed");
            false
        }
    }
}

/// Validate a plaintext password before hashing
///
/// bcrypt only reads the first 72 bytes; longer input is rejected.
pub fn validate_password(plain: &str) -> AppResult<()> {
    if plain.trim().is_empty() {
        return Err(AppError::required("password"));
    }
    if plain.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::validation(format!(
            "password is too long ({} bytes, max {MAX_PASSWORD_BYTES})",
            plain.len()
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

#[derive(Clone)]
pub struct CredentialService {
    users: Arc<UserStore>,
    jwt: Arc<JwtService>,
}

impl CredentialService {
    pub fn new(users: Arc<UserStore>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Register a new account
    ///
    /// Fails with `UsernameExists` when the username is taken (exact match).
    pub fn register(&self, req: RegisterRequest) -> AppResult<PublicUser> {
        validate_required_text(&req.username, "username", MAX_NAME_LEN)?;
        validate_password(&req.password)?;
        validate_email(&req.email, "email")?;

        let user = self.users.create(NewUser {
            username: req.username,
            password_hash: hash_password(&req.password)?,
            email: req.email,
            role: req.role,
        })?;

        tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "User registered");
        Ok(PublicUser::from(user))
    }

    /// Check a username/password pair
    ///
    /// Unknown users and wrong passwords both yield `None`.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<PublicUser> {
        match self.users.find_by_username(username) {
            Some(user) if verify_password(password, &user.password_hash) => {
                Some(PublicUser::from(user))
            }
            Some(_) => None,
            None => {
                verify_password(password, &DUMMY_HASH);
                None
            }
        }
    }

    /// Authenticate and issue an access token
    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let Some(user) = self.authenticate(username, password) else {
            security_log!("WARN", "login_failed", username = username.to_string());
            return Err(AppError::invalid_credentials());
        };

        let access_token = self
            .jwt
            .generate_token(user.id, &user.username, user.role)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            role = %user.role,
            "User logged in successfully"
        );

        Ok(LoginResponse {
            access_token,
            user: UserInfo::from(&user),
        })
    }
}
