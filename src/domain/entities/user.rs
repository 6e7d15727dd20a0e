use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub alias: Option<String>,
    pub email: Option<String>,
    /// argon2 PHC string.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
    pub platform_type: Option<String>,
    pub platform_id: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attributes supplied when registering a user. The identifier is assigned
/// by the identity store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub alias: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    pub platform_type: Option<String>,
    pub platform_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    pub username: Option<String>,
    pub alias: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl User {
    pub fn new(user_id: UserId, username: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            username,
            alias: None,
            email: None,
            password_hash: None,
            access_token: None,
            platform_type: None,
            platform_id: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a user with a fresh id, hashing the password if one is given.
    pub fn register(new_user: NewUser) -> Result<Self, AppError> {
        let username = Self::validate_username(&new_user.username)?;
        let password_hash = new_user
            .password
            .as_deref()
            .map(Self::hash_password)
            .transpose()?;

        let mut user = Self::new(UserId::generate(), username);
        user.alias = new_user.alias;
        user.email = new_user.email;
        user.password_hash = password_hash;
        user.access_token = new_user.access_token;
        user.platform_type = new_user.platform_type;
        user.platform_id = new_user.platform_id;
        user.description = new_user.description;
        Ok(user)
    }

    pub fn apply_update(&mut self, update: UserProfileUpdate) -> Result<(), AppError> {
        if let Some(username) = update.username {
            self.username = Self::validate_username(&username)?;
        }
        if let Some(alias) = update.alias {
            self.alias = Some(alias);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Uses argon2 to verify the stored hash against `password`.
    pub fn verify_password(&self, password: &str) -> bool {
        let Some(stored) = self.password_hash.as_deref() else {
            return false;
        };
        let hash = match PasswordHash::new(stored) {
            Ok(hash) => hash,
            Err(err) => {
                tracing::error!(user_id = %self.user_id, "failed to parse password hash: {}", err);
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
    }

    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    fn validate_username(username: &str) -> Result<String, AppError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
