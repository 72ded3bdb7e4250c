use axum::{extract::State, Extension, Json};
use sqlx::PgPool;

use ses_backend::{
    error::AppError,
    handlers::auth::{login, me},
    models::user::{LoginRequest, UserRole},
    utils::jwt::verify_access_token,
};

mod support;

use support::{seed_user, seed_user_with_password, test_config, test_state};

#[sqlx::test(migrations = "./migrations")]
async fn login_returns_token_and_user_for_valid_credentials(pool: PgPool) {
    let user = seed_user_with_password(&pool, UserRole::Submitter, "CorrectHorse9!").await;
    let config = test_config();
    let state = test_state(pool);

    let response = login(
        State(state),
        Json(LoginRequest {
            email: user.email.clone(),
            password: "CorrectHorse9!".to_string(),
        }),
    )
    .await
    .expect("login");

    let body = response.0;
    assert_eq!(body.user.id, user.id);
    assert_eq!(body.user.email, user.email);
    assert_eq!(body.user.role, "SUBMITTER");

    let claims = verify_access_token(&body.access_token, &config.jwt_secret)
        .expect("token verifies against the configured secret");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, "SUBMITTER");
}

#[sqlx::test(migrations = "./migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    let user = seed_user_with_password(&pool, UserRole::Submitter, "CorrectHorse9!").await;
    let state = test_state(pool);

    let err = login(
        State(state),
        Json(LoginRequest {
            email: user.email.clone(),
            password: "WrongHorse9!".to_string(),
        }),
    )
    .await
    .expect_err("wrong password should fail");

    match err {
        AppError::Unauthorized(message) => assert_eq!(message, "Invalid email or password"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn login_answers_unknown_email_with_the_same_message(pool: PgPool) {
    let state = test_state(pool);

    let err = login(
        State(state),
        Json(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "CorrectHorse9!".to_string(),
        }),
    )
    .await
    .expect_err("unknown email should fail");

    match err {
        AppError::Unauthorized(message) => assert_eq!(message, "Invalid email or password"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn me_returns_the_authenticated_user_without_password_fields(pool: PgPool) {
    let user = seed_user(&pool, UserRole::SystemManager).await;

    let response = me(Extension(user.clone())).await;

    assert_eq!(response.0.id, user.id);
    assert_eq!(response.0.name, user.name);
    assert_eq!(response.0.role, "SYSTEM_MANAGER");

    let json = serde_json::to_value(&response.0).expect("serialize user response");
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}
