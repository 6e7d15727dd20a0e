pub(super) const INSERT_USER: &str = r#"
    INSERT INTO users (
        user_id,
        username,
        alias,
        email,
        password_hash,
        access_token,
        platform_type,
        platform_id,
        description,
        created_at,
        updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub(super) const SELECT_USER_BY_ID: &str = r#"
    SELECT
        user_id,
        username,
        alias,
        email,
        password_hash,
        access_token,
        platform_type,
        platform_id,
        description,
        created_at,
        updated_at
    FROM users
    WHERE user_id = ?
"#;

pub(super) const SELECT_USER_EXISTS: &str = r#"
    SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?1) AS present
"#;

pub(super) const UPDATE_USER: &str = r#"
    UPDATE users
    SET
        username = ?,
        alias = ?,
        email = ?,
        description = ?,
        updated_at = ?
    WHERE user_id = ?
"#;

pub(super) const DELETE_USER: &str = r#"
    DELETE FROM users
    WHERE user_id = ?
"#;

pub(super) const INSERT_SUBSCRIPTION: &str = r#"
    INSERT INTO subscriptions (subscriber_id, subscribe_to_id, created_at)
    VALUES (?1, ?2, ?3)
"#;

pub(super) const DELETE_SUBSCRIPTION: &str = r#"
    DELETE FROM subscriptions
    WHERE subscriber_id = ?1 AND subscribe_to_id = ?2
"#;

pub(super) const SELECT_SUBSCRIPTION: &str = r#"
    SELECT sequence, subscriber_id, subscribe_to_id, created_at
    FROM subscriptions
    WHERE subscriber_id = ?1 AND subscribe_to_id = ?2
"#;

pub(super) const SELECT_SUBSCRIPTIONS: &str = r#"
    SELECT
        u.user_id,
        u.username,
        u.alias,
        u.email,
        u.password_hash,
        u.access_token,
        u.platform_type,
        u.platform_id,
        u.description,
        u.created_at,
        u.updated_at
    FROM subscriptions s
    INNER JOIN users u ON u.user_id = s.subscribe_to_id
    WHERE s.subscriber_id = ?1
    ORDER BY s.sequence ASC
"#;

pub(super) const SELECT_SUBSCRIBERS: &str = r#"
    SELECT
        u.user_id,
        u.username,
        u.alias,
        u.email,
        u.password_hash,
        u.access_token,
        u.platform_type,
        u.platform_id,
        u.description,
        u.created_at,
        u.updated_at
    FROM subscriptions s
    INNER JOIN users u ON u.user_id = s.subscriber_id
    WHERE s.subscribe_to_id = ?1
    ORDER BY s.sequence ASC
"#;

pub(super) const COUNT_SUBSCRIPTIONS: &str = r#"
    SELECT COUNT(*) AS count
    FROM subscriptions
    WHERE subscriber_id = ?1
"#;

pub(super) const COUNT_SUBSCRIBERS: &str = r#"
    SELECT COUNT(*) AS count
    FROM subscriptions
    WHERE subscribe_to_id = ?1
"#;
