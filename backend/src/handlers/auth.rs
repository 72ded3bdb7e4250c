use axum::{extract::State, Extension, Json};

use crate::{
    error::AppError,
    models::user::{LoginRequest, LoginResponse, User, UserResponse},
    repositories::user as user_repo,
    state::AppState,
    utils::{create_access_token, verify_password},
};

/// Exchanges credentials for a bearer token. Unknown accounts and bad
/// passwords get the same answer so the response does not leak which
/// emails exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = user_repo::find_user_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let password_matches = verify_password(&payload.password, &user.password_hash)?;
    if !password_matches {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let access_token = create_access_token(
        user.id.clone(),
        user.email.clone(),
        user.role.as_str().to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(Json(LoginResponse {
        access_token,
        user: UserResponse::from(user),
    }))
}

pub async fn me(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
