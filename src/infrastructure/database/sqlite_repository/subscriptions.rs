use super::mapper::{map_subscription_row, map_user_row};
use super::queries::{
    COUNT_SUBSCRIBERS, COUNT_SUBSCRIPTIONS, DELETE_SUBSCRIPTION, INSERT_SUBSCRIPTION,
    SELECT_SUBSCRIBERS, SELECT_SUBSCRIPTION, SELECT_SUBSCRIPTIONS,
};
use super::SqliteRepository;
use crate::application::ports::repositories::SubscriptionRepository;
use crate::domain::constants::{DUPLICATE_SUBSCRIPTION, USER_NOT_FOUND};
use crate::domain::entities::{Subscription, User};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

impl SqliteRepository {
    async fn fetch_users(&self, query: &str, user_id: &UserId) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(query)
            .bind(user_id.as_str())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            users.push(map_user_row(&row)?);
        }

        Ok(users)
    }

    async fn fetch_count(&self, query: &str, user_id: &UserId) -> Result<u64, AppError> {
        let row = sqlx::query(query)
            .bind(user_id.as_str())
            .fetch_one(self.pool.get_pool())
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count as u64)
    }
}

/// Constraint violations raised by the insert carry domain meaning; anything
/// else is a storage failure.
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateEntry(DUPLICATE_SUBSCRIPTION.to_string());
        }
        // A user deleted between validation and insert, or a self edge.
        if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
            return AppError::NotFound(USER_NOT_FOUND.to_string());
        }
    }
    AppError::from(err)
}

#[async_trait]
impl SubscriptionRepository for SqliteRepository {
    async fn insert_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<Subscription, AppError> {
        let now = Utc::now();
        let created_at_ms = now.timestamp_millis();

        let result = sqlx::query(INSERT_SUBSCRIPTION)
            .bind(subscriber.as_str())
            .bind(subscribe_to.as_str())
            .bind(created_at_ms)
            .execute(self.pool.get_pool())
            .await
            .map_err(map_insert_error)?;

        let created_at = DateTime::from_timestamp_millis(created_at_ms).unwrap_or(now);
        Ok(Subscription::new(
            subscriber.clone(),
            subscribe_to.clone(),
            result.last_insert_rowid(),
            created_at,
        ))
    }

    async fn delete_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(DELETE_SUBSCRIPTION)
            .bind(subscriber.as_str())
            .bind(subscribe_to.as_str())
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<Option<Subscription>, AppError> {
        let row = sqlx::query(SELECT_SUBSCRIPTION)
            .bind(subscriber.as_str())
            .bind(subscribe_to.as_str())
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_subscription_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_subscriptions(&self, subscriber: &UserId) -> Result<Vec<User>, AppError> {
        self.fetch_users(SELECT_SUBSCRIPTIONS, subscriber).await
    }

    async fn list_subscribers(&self, subscribe_to: &UserId) -> Result<Vec<User>, AppError> {
        self.fetch_users(SELECT_SUBSCRIBERS, subscribe_to).await
    }

    async fn count_subscriptions(&self, subscriber: &UserId) -> Result<u64, AppError> {
        self.fetch_count(COUNT_SUBSCRIPTIONS, subscriber).await
    }

    async fn count_subscribers(&self, subscribe_to: &UserId) -> Result<u64, AppError> {
        self.fetch_count(COUNT_SUBSCRIBERS, subscribe_to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::repositories::UserRepository;
    use crate::infrastructure::database::sqlite_repository::test_support::setup_repository;

    async fn seed_user(repo: &SqliteRepository, username: &str) -> UserId {
        let user = User::new(UserId::generate(), username.to_string());
        repo.create_user(&user).await.expect("user created");
        user.user_id
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_pair() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let b = seed_user(&repo, "b").await;

        repo.insert_subscription(&a, &b).await.expect("first insert");
        let err = repo.insert_subscription(&a, &b).await.unwrap_err();
        match err {
            AppError::DuplicateEntry(msg) => assert_eq!(msg, DUPLICATE_SUBSCRIPTION),
            other => panic!("expected DuplicateEntry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reverse_direction_is_a_distinct_edge() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let b = seed_user(&repo, "b").await;

        repo.insert_subscription(&a, &b).await.expect("a -> b");
        repo.insert_subscription(&b, &a).await.expect("b -> a");

        assert_eq!(repo.count_subscriptions(&a).await.unwrap(), 1);
        assert_eq!(repo.count_subscribers(&a).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn storage_constraints_reject_unknown_users_and_self_edges() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let ghost = UserId::generate();

        let err = repo.insert_subscription(&a, &ghost).await.unwrap_err();
        assert!(err.is_not_found());

        let err = repo.insert_subscription(&a, &a).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn recreated_edge_gets_a_later_sequence() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let b = seed_user(&repo, "b").await;
        let c = seed_user(&repo, "c").await;

        let first = repo.insert_subscription(&a, &b).await.expect("a -> b");
        repo.insert_subscription(&a, &c).await.expect("a -> c");
        assert!(repo.delete_subscription(&a, &b).await.expect("delete"));
        let second = repo.insert_subscription(&a, &b).await.expect("a -> b again");

        assert!(second.sequence > first.sequence);
        let names: Vec<String> = repo
            .list_subscriptions(&a)
            .await
            .expect("list")
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn get_subscription_returns_stored_edge() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let b = seed_user(&repo, "b").await;

        assert!(repo.get_subscription(&a, &b).await.unwrap().is_none());
        let created = repo.insert_subscription(&a, &b).await.expect("a -> b");
        let stored = repo
            .get_subscription(&a, &b)
            .await
            .unwrap()
            .expect("edge present");
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn deleting_a_user_cascades_to_edges() {
        let repo = setup_repository().await;
        let a = seed_user(&repo, "a").await;
        let b = seed_user(&repo, "b").await;
        let c = seed_user(&repo, "c").await;

        repo.insert_subscription(&a, &b).await.expect("a -> b");
        repo.insert_subscription(&b, &c).await.expect("b -> c");
        assert!(repo.delete_user(&b).await.expect("delete user"));

        assert_eq!(repo.count_subscriptions(&a).await.unwrap(), 0);
        assert_eq!(repo.count_subscribers(&c).await.unwrap(), 0);
    }
}
