use crate::domain::entities::{Subscription, User};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

pub(super) fn map_user_row(row: &SqliteRow) -> Result<User, AppError> {
    let created_at = map_timestamp(row, "created_at")?;
    let updated_at = map_timestamp(row, "updated_at")?;

    Ok(User {
        user_id: map_user_id(row, "user_id")?,
        username: row.try_get("username")?,
        alias: row.try_get("alias")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        access_token: row.try_get("access_token")?,
        platform_type: row.try_get("platform_type")?,
        platform_id: row.try_get("platform_id")?,
        description: row.try_get("description")?,
        created_at,
        updated_at,
    })
}

pub(super) fn map_subscription_row(row: &SqliteRow) -> Result<Subscription, AppError> {
    let created_at = map_timestamp(row, "created_at")?;

    Ok(Subscription::new(
        map_user_id(row, "subscriber_id")?,
        map_user_id(row, "subscribe_to_id")?,
        row.try_get("sequence")?,
        created_at,
    ))
}

fn map_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, AppError> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::Database(format!("{column} out of range: {millis}")))
}

fn map_user_id(row: &SqliteRow, column: &str) -> Result<UserId, AppError> {
    let value: String = row.try_get(column)?;
    UserId::new(value).map_err(AppError::Database)
}
