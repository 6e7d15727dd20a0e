pub mod subscription;
pub mod user;

pub use subscription::Subscription;
pub use user::{NewUser, User, UserProfileUpdate};
