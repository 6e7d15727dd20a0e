//! Storage for a directed "subscription" relation between users.
//!
//! [`SubscriptionService`] owns the edge invariants: no self subscriptions,
//! both endpoints must exist, and at most one live edge per ordered pair.
//! Users are owned by the identity store behind [`UserService`]. Both sit on
//! a SQLite database reached through `sqlx`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod state;

pub use application::services::{SubscriptionService, UserService};
pub use domain::entities::{NewUser, Subscription, User, UserProfileUpdate};
pub use domain::value_objects::UserId;
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;
