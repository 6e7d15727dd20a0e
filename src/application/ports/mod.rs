pub mod repositories;

pub use repositories::{Repository, SubscriptionRepository, UserRepository};
