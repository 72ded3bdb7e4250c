use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Validation(Vec<String>),
    RateLimited { retry_after: u64 },
    Storage(String),
    StorageNotConfigured,
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string(), None),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                msg,
                "UNAUTHORIZED".to_string(),
                None,
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, "FORBIDDEN".to_string(), None),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "BAD_REQUEST".to_string(),
                None,
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_ERROR".to_string(),
                Some(serde_json::json!({ "errors": errors })),
            ),
            AppError::RateLimited { retry_after } => {
                let body = Json(ErrorResponse {
                    error: "Too many requests. Please try again later.".to_string(),
                    code: "RATE_LIMITED".to_string(),
                    details: Some(serde_json::json!({ "retry_after": retry_after })),
                });
                let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
                if let Ok(value) = retry_after.to_string().parse() {
                    response.headers_mut().insert("retry-after", value);
                }
                return response;
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Object storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage operation failed".to_string(),
                    "STORAGE_ERROR".to_string(),
                    None,
                )
            }
            AppError::StorageNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "S3 is not configured".to_string(),
                "STORAGE_NOT_CONFIGURED".to_string(),
                None,
            ),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code,
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            _ => AppError::InternalServerError(err.into()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(crate::validation::error_messages(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn client_errors_keep_their_message_and_code() {
        let cases = [
            (
                AppError::NotFound("Evidence not found".to_string()),
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Evidence not found",
            ),
            (
                AppError::Unauthorized("Unauthorized".to_string()),
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized",
            ),
            (
                AppError::Forbidden("Forbidden".to_string()),
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Forbidden",
            ),
            (
                AppError::BadRequest("Axis ID is required".to_string()),
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Axis ID is required",
            ),
        ];

        for (error, status, code, message) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            let json = response_json(response).await;
            assert_eq!(json["error"], message);
            assert_eq!(json["code"], code);
            assert!(json["details"].is_null());
        }
    }

    #[tokio::test]
    async fn validation_failures_list_every_message() {
        let response = AppError::Validation(vec![
            "title: Title must be at least 3 characters".to_string(),
            "url: URL is required when type is LINK".to_string(),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["code"], "VALIDATION_ERROR");
        let errors = json["details"]["errors"].as_array().expect("errors array");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1], "url: URL is required when type is LINK");
    }

    #[tokio::test]
    async fn rate_limited_sets_the_retry_after_header() {
        let response = AppError::RateLimited { retry_after: 17 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok()),
            Some("17")
        );
        let json = response_json(response).await;
        assert_eq!(json["code"], "RATE_LIMITED");
        assert_eq!(json["details"]["retry_after"], 17);
    }

    #[tokio::test]
    async fn storage_failures_hide_the_underlying_error() {
        let response = AppError::Storage("bucket unreachable".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Storage operation failed");
        assert_eq!(json["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn missing_storage_config_reports_a_distinct_code() {
        let response = AppError::StorageNotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "S3 is not configured");
        assert_eq!(json["code"], "STORAGE_NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause() {
        let response = AppError::InternalServerError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["code"], "INTERNAL_SERVER_ERROR");
        assert!(json["details"].is_null());
    }

    #[test]
    fn sqlx_row_not_found_becomes_a_404() {
        match AppError::from(sqlx::Error::RowNotFound) {
            AppError::NotFound(message) => assert_eq!(message, "Resource not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
