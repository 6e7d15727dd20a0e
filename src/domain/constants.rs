pub const USER_NOT_FOUND: &str = "User not found";
pub const DUPLICATE_SUBSCRIPTION: &str = "Duplicate Subscription";
