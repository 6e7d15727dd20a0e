use crate::application::ports::repositories::{SubscriptionRepository, UserRepository};
use crate::domain::constants::USER_NOT_FOUND;
use crate::domain::entities::{Subscription, User};
use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Creates, removes and queries directed subscription edges.
///
/// Every operation validates the referenced users against the identity store
/// before touching edges. Outcomes fall into three classes that callers can
/// tell apart: `NotFound` (a referenced user is missing), `DuplicateEntry`
/// (the edge already exists) and a well-defined empty result (`false`, an
/// empty list or `0`).
pub struct SubscriptionService {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            users,
            subscriptions,
        }
    }

    /// Subscribing to oneself is reported as `NotFound`, the same as an
    /// unknown target.
    pub async fn create_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<Subscription, AppError> {
        if subscriber == subscribe_to {
            warn!(user_id = %subscriber, "rejected self subscription");
            return Err(user_not_found());
        }
        self.ensure_user_exists(subscribe_to).await?;
        self.ensure_user_exists(subscriber).await?;

        let subscription = self
            .subscriptions
            .insert_subscription(subscriber, subscribe_to)
            .await
            .inspect_err(|err| {
                if err.is_duplicate_entry() {
                    warn!(%subscriber, %subscribe_to, "duplicate subscription");
                }
            })?;

        info!(
            %subscriber,
            %subscribe_to,
            sequence = subscription.sequence,
            "subscription created"
        );
        Ok(subscription)
    }

    /// Returns `false` when the subscriber exists but has no edge to
    /// `subscribe_to`, whether or not `subscribe_to` exists.
    pub async fn delete_subscription(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<bool, AppError> {
        self.ensure_user_exists(subscriber).await?;

        let removed = self
            .subscriptions
            .delete_subscription(subscriber, subscribe_to)
            .await?;
        if removed {
            info!(%subscriber, %subscribe_to, "subscription deleted");
        } else {
            debug!(%subscriber, %subscribe_to, "no subscription to delete");
        }
        Ok(removed)
    }

    pub async fn is_subscribed(
        &self,
        subscriber: &UserId,
        subscribe_to: &UserId,
    ) -> Result<bool, AppError> {
        self.ensure_user_exists(subscriber).await?;
        Ok(self
            .subscriptions
            .get_subscription(subscriber, subscribe_to)
            .await?
            .is_some())
    }

    /// Users `subscriber` subscribes to, oldest subscription first.
    pub async fn get_subscriptions(&self, subscriber: &UserId) -> Result<Vec<User>, AppError> {
        self.ensure_user_exists(subscriber).await?;
        let users = self.subscriptions.list_subscriptions(subscriber).await?;
        debug!(%subscriber, count = users.len(), "listed subscriptions");
        Ok(users)
    }

    /// Users subscribing to `subscribe_to`, oldest subscription first.
    pub async fn get_subscribers(&self, subscribe_to: &UserId) -> Result<Vec<User>, AppError> {
        self.ensure_user_exists(subscribe_to).await?;
        let users = self.subscriptions.list_subscribers(subscribe_to).await?;
        debug!(%subscribe_to, count = users.len(), "listed subscribers");
        Ok(users)
    }

    pub async fn get_number_of_subscriptions(&self, subscriber: &UserId) -> Result<u64, AppError> {
        self.ensure_user_exists(subscriber).await?;
        self.subscriptions.count_subscriptions(subscriber).await
    }

    pub async fn get_number_of_subscribers(&self, subscribe_to: &UserId) -> Result<u64, AppError> {
        self.ensure_user_exists(subscribe_to).await?;
        self.subscriptions.count_subscribers(subscribe_to).await
    }

    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), AppError> {
        if self.users.user_exists(user_id).await? {
            Ok(())
        } else {
            debug!(%user_id, "user lookup failed");
            Err(user_not_found())
        }
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}
