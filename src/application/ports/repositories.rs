use crate::domain::entities::{Subscription, User};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait Repository: UserRepository + SubscriptionRepository {
    async fn initialize(&self) -> Result<(), AppError>;
    async fn health_check(&self) -> Result<bool, AppError>;
}

/// Identity store: the sole owner of user existence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), AppError>;
    async fn get_user(&self, user_id: &UserId) -> Result<Option<User>, AppError>;
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, AppError>;
    /// Fails with `NotFound` when no stored user has `user.user_id`.
    async fn update_user(&self, user: &User) -> Result<(), AppError>;
    /// Removes the user and, through the storage layer, every edge touching it.
    async fn delete_user(&self, user_id: &UserId) -> Result<bool, AppError>;
}

/// Directed subscription edges. List results are ordered by edge creation,
/// oldest first.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Fails with `DuplicateEntry` when the ordered pair already has a live edge.
    async fn insert_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<Subscription, AppError>;
    async fn delete_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<bool, AppError>;
    async fn get_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<Option<Subscription>, AppError>;
    async fn list_subscriptions(&self, subscriber: &UserId) -> Result<Vec<User>, AppError>;
    async fn list_subscribers(&self, subscribe_to: &UserId) -> Result<Vec<User>, AppError>;
    async fn count_subscriptions(&self, subscriber: &UserId) -> Result<u64, AppError>;
    async fn count_subscribers(&self, subscribe_to: &UserId) -> Result<u64, AppError>;
}
