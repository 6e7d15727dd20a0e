mod common;

use common::{miss_pro, mr_workaholic, noob_nie};
use futures::future::join_all;
use subscription_store::shared::config::DatabaseConfig;
use subscription_store::infrastructure::database::ConnectionPool;
use subscription_store::{AppError, AppState};
use tempfile::TempDir;

async fn setup_file_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", temp_dir.path().join("test.db").display()),
        max_connections: 8,
        connection_timeout: 10,
    };
    let pool = ConnectionPool::with_config(&config)
        .await
        .expect("create pool");
    let state = AppState::from_pool(pool).await.expect("initialize state");
    (state, temp_dir)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_for_one_pair_yield_a_single_edge() {
    let (state, _temp_dir) = setup_file_state().await;
    let user1 = state.user_service.create_user(noob_nie()).await.unwrap();
    let user2 = state.user_service.create_user(miss_pro()).await.unwrap();

    let attempts = (0..8).map(|_| {
        let service = state.subscription_service.clone();
        let subscriber = user1.user_id.clone();
        let subscribe_to = user2.user_id.clone();
        tokio::spawn(async move {
            service
                .create_subscription(&subscriber, &subscribe_to)
                .await
        })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::DuplicateEntry(_))))
        .count();
    assert_eq!(created, 1);
    assert_eq!(duplicates, results.len() - 1);
    assert_eq!(
        state
            .subscription_service
            .get_number_of_subscriptions(&user1.user_id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_for_disjoint_pairs_all_succeed() {
    let (state, _temp_dir) = setup_file_state().await;
    let user1 = state.user_service.create_user(noob_nie()).await.unwrap();
    let user2 = state.user_service.create_user(miss_pro()).await.unwrap();
    let user3 = state.user_service.create_user(mr_workaholic()).await.unwrap();

    let pairs = vec![
        (user1.user_id.clone(), user2.user_id.clone()),
        (user1.user_id.clone(), user3.user_id.clone()),
        (user2.user_id.clone(), user1.user_id.clone()),
        (user2.user_id.clone(), user3.user_id.clone()),
        (user3.user_id.clone(), user1.user_id.clone()),
        (user3.user_id.clone(), user2.user_id.clone()),
    ];
    let attempts = pairs.into_iter().map(|(subscriber, subscribe_to)| {
        let service = state.subscription_service.clone();
        tokio::spawn(async move {
            service
                .create_subscription(&subscriber, &subscribe_to)
                .await
        })
    });

    for joined in join_all(attempts).await {
        joined.expect("task panicked").expect("create subscription");
    }

    for user in [&user1, &user2, &user3] {
        let service = &state.subscription_service;
        assert_eq!(
            service.get_number_of_subscriptions(&user.user_id).await.unwrap(),
            2
        );
        assert_eq!(
            service.get_number_of_subscribers(&user.user_id).await.unwrap(),
            2
        );
    }
}
