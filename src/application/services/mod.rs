pub mod subscription_service;
pub mod user_service;

pub use subscription_service::SubscriptionService;
pub use user_service::UserService;
