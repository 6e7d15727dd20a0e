#![allow(dead_code)]

use subscription_store::infrastructure::database::ConnectionPool;
use subscription_store::{AppState, NewUser, User, UserId};

pub async fn setup_state() -> AppState {
    let pool = ConnectionPool::from_memory()
        .await
        .expect("failed to create pool");
    AppState::from_pool(pool).await.expect("failed to initialize state")
}

pub fn noob_nie() -> NewUser {
    NewUser {
        username: "Noob Nie".to_string(),
        alias: Some("the noobie".to_string()),
        email: Some("noob@gmail.com".to_string()),
        password: Some("secretpass".to_string()),
        access_token: Some("atoken".to_string()),
        platform_type: Some("facebook".to_string()),
        platform_id: Some("asdfadf-asdfasdf-asdfasdfaf-dfddf".to_string()),
        description: Some("noob has a noobie description".to_string()),
    }
}

pub fn miss_pro() -> NewUser {
    NewUser {
        username: "Miss Pro".to_string(),
        alias: Some("Pro in the wonderland".to_string()),
        email: Some("pro@prototype.com".to_string()),
        password: Some("generated".to_string()),
        access_token: Some("anaccesstoken".to_string()),
        platform_type: Some("facebook".to_string()),
        platform_id: Some("45454545454".to_string()),
        description: Some("pro is too cool for description".to_string()),
    }
}

pub fn mr_workaholic() -> NewUser {
    NewUser {
        username: "Mr Workaholic".to_string(),
        alias: Some("workaholic".to_string()),
        email: Some("workaholic@office.com".to_string()),
        password: Some("generated".to_string()),
        access_token: Some("another accesstoken".to_string()),
        platform_type: Some("facebook".to_string()),
        platform_id: Some("22222222222".to_string()),
        description: Some("workaholic is too busy for description".to_string()),
    }
}

pub async fn create_users(state: &AppState) -> (User, User, User) {
    let user1 = state
        .user_service
        .create_user(noob_nie())
        .await
        .expect("create user1");
    let user2 = state
        .user_service
        .create_user(miss_pro())
        .await
        .expect("create user2");
    let user3 = state
        .user_service
        .create_user(mr_workaholic())
        .await
        .expect("create user3");
    (user1, user2, user3)
}

/// An id the identity store never assigned.
pub fn invalid_id() -> UserId {
    UserId::new("00000000-0000-0000-0000-000000000000".to_string()).expect("valid id")
}

pub fn usernames(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}
