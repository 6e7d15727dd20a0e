use crate::domain::value_objects::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live directed edge: `subscriber` follows `subscribe_to`.
///
/// Edges carry no identity beyond the ordered pair. `sequence` only orders
/// result sets; a recreated pair always receives a larger one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscriber: UserId,
    pub subscribe_to: UserId,
    pub sequence: i64,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(
        subscriber: UserId,
        subscribe_to: UserId,
        sequence: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subscriber,
            subscribe_to,
            sequence,
            created_at,
        }
    }
}
