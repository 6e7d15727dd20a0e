use crate::application::ports::repositories::UserRepository;
use crate::domain::constants::USER_NOT_FOUND;
use crate::domain::entities::{NewUser, User, UserProfileUpdate};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::register(new_user)?;
        self.repository.create_user(&user).await?;
        info!(user_id = %user.user_id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &UserId) -> Result<Option<User>, AppError> {
        self.repository.get_user(user_id).await
    }

    pub async fn user_exists(&self, user_id: &UserId) -> Result<bool, AppError> {
        self.repository.user_exists(user_id).await
    }

    pub async fn update_profile(
        &self,
        user_id: &UserId,
        update: UserProfileUpdate,
    ) -> Result<User, AppError> {
        let mut user = self
            .repository
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        user.apply_update(update)?;
        self.repository.update_user(&user).await?;
        Ok(user)
    }

    pub async fn verify_password(&self, user_id: &UserId, password: &str) -> Result<bool, AppError> {
        let user = self
            .repository
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        Ok(user.verify_password(password))
    }

    pub async fn delete_user(&self, user_id: &UserId) -> Result<bool, AppError> {
        let deleted = self.repository.delete_user(user_id).await?;
        if deleted {
            info!(user_id = %user_id, "user deleted");
        }
        Ok(deleted)
    }
}
