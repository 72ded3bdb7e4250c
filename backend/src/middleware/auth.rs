use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::User,
    repositories::user::find_user_by_id,
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = extract_auth_header(request.headers());
    let (claims, user) = authenticate_request(auth_header.as_deref(), &state).await?;
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user.clone());

    let mut response = next.run(request).await;
    response.extensions_mut().insert(user);
    Ok(response)
}

// Auth + require the reviewer role for review routes
pub async fn auth_manager(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = extract_auth_header(request.headers());
    let (claims, user) = authenticate_request(auth_header.as_deref(), &state).await?;
    if !user.is_system_manager() {
        return Err(AppError::Forbidden(
            "Access denied. System Manager role required.".to_string(),
        ));
    }

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user.clone());
    let mut response = next.run(request).await;
    response.extensions_mut().insert(user);
    Ok(response)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    if let Some(rest) = header.strip_prefix("Bearer ") {
        return Some(rest);
    }
    if let Some(rest) = header.strip_prefix("bearer ") {
        return Some(rest);
    }
    if let Some(space_idx) = header.find(' ') {
        let (scheme, rest) = header.split_at(space_idx);
        if scheme.eq_ignore_ascii_case("bearer") {
            return Some(rest.trim_start());
        }
    }
    None
}

async fn authenticate_request(
    auth_header: Option<&str>,
    state: &AppState,
) -> Result<(Claims, User), AppError> {
    let token = auth_header
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    let claims = verify_access_token(token, &state.config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))?;

    let user = find_user_by_id(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    Ok((claims, user))
}

fn extract_auth_header(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    #[test]
    fn parse_bearer_token_accepts_case_variants() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER abc"), Some("abc"));
        assert_eq!(parse_bearer_token("Bearer  abc"), Some(" abc"));
    }

    #[test]
    fn parse_bearer_token_rejects_other_schemes() {
        assert_eq!(parse_bearer_token("Basic abc"), None);
        assert_eq!(parse_bearer_token("abc"), None);
        assert_eq!(parse_bearer_token(""), None);
    }

    fn test_state() -> AppState {
        let config = crate::config::Config {
            database_url: "postgres://localhost/test".to_string(),
            port: 3000,
            jwt_secret: "test-secret-key".to_string(),
            jwt_expiration_hours: 1,
            time_zone: chrono_tz::UTC,
            storage: None,
            upload_url_ttl_secs: 3600,
            download_url_ttl_secs: 3600,
            max_upload_bytes: 50 * 1024 * 1024,
            rate_limit_ip_max_requests: 10,
            rate_limit_ip_window_seconds: 60,
            rate_limit_upload_max_requests: 30,
            rate_limit_upload_window_seconds: 3600,
        };
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.database_url)
            .expect("create lazy pool");
        AppState::new(pool, None, config)
    }

    fn protected_app(state: AppState) -> Router {
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(state.clone(), auth))
            .with_state(state)
    }

    #[tokio::test]
    async fn auth_rejects_requests_without_a_token() {
        let response = protected_app(test_state())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("call request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn auth_rejects_garbage_tokens_before_touching_the_database() {
        let response = protected_app(test_state())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/protected")
                    .header("authorization", "Bearer not.a.token")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("call request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn auth_rejects_non_bearer_schemes() {
        let response = protected_app(test_state())
            .oneshot(
                axum::http::Request::builder()
                    .uri("/protected")
                    .header("authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("call request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
