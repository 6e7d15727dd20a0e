use super::mapper::map_user_row;
use super::queries::{DELETE_USER, INSERT_USER, SELECT_USER_BY_ID, SELECT_USER_EXISTS, UPDATE_USER};
use super::SqliteRepository;
use crate::application::ports::repositories::UserRepository;
use crate::domain::constants::USER_NOT_FOUND;
use crate::domain::entities::User;
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::Row;

fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateEntry("Duplicate User".to_string());
        }
    }
    AppError::from(err)
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(INSERT_USER)
            .bind(user.user_id.as_str())
            .bind(&user.username)
            .bind(&user.alias)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.access_token)
            .bind(&user.platform_type)
            .bind(&user.platform_id)
            .bind(&user.description)
            .bind(user.created_at.timestamp_millis())
            .bind(user.updated_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn get_user(&self, user_id: &UserId) -> Result<Option<User>, AppError> {
        let row = sqlx::query(SELECT_USER_BY_ID)
            .bind(user_id.as_str())
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_user_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn user_exists(&self, user_id: &UserId) -> Result<bool, AppError> {
        let row = sqlx::query(SELECT_USER_EXISTS)
            .bind(user_id.as_str())
            .fetch_one(self.pool.get_pool())
            .await?;

        let present: i64 = row.try_get("present")?;
        Ok(present != 0)
    }

    async fn update_user(&self, user: &User) -> Result<(), AppError> {
        let result = sqlx::query(UPDATE_USER)
            .bind(&user.username)
            .bind(&user.alias)
            .bind(&user.email)
            .bind(&user.description)
            .bind(user.updated_at.timestamp_millis())
            .bind(user.user_id.as_str())
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<bool, AppError> {
        let result = sqlx::query(DELETE_USER)
            .bind(user_id.as_str())
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
