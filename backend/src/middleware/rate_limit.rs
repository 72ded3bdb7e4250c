use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response as AxumResponse,
    Json,
};
use governor::middleware::StateInformationMiddleware;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorError,
    GovernorLayer,
};

use crate::config::Config;
use crate::error::{AppError, ErrorResponse};
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::jwt::Claims;

/// Upload budget for one account. `started_at` marks the beginning of the
/// current window and `used` counts uploads accepted inside it.
#[derive(Debug, Clone, Copy)]
struct UploadWindow {
    started_at: Instant,
    used: u32,
}

// Expired windows are swept once the map outgrows this, which keeps the
// store bounded by the number of accounts active within one window.
const WINDOW_SWEEP_LEN: usize = 10_000;

fn upload_windows() -> &'static Mutex<HashMap<String, UploadWindow>> {
    static WINDOWS: OnceLock<Mutex<HashMap<String, UploadWindow>>> = OnceLock::new();
    WINDOWS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Fixed-window per-account limiter for the upload endpoints. Runs after
/// authentication so the account id is available as the window key.
pub async fn upload_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AxumResponse {
    let key = request
        .extensions()
        .get::<User>()
        .map(|user| user.id.clone())
        .or_else(|| {
            request
                .extensions()
                .get::<Claims>()
                .map(|claims| claims.sub.clone())
        });

    let Some(key) = key else {
        return AppError::InternalServerError(anyhow::anyhow!(
            "Unable to determine request identity"
        ))
        .into_response();
    };

    let max_uploads = state.config.rate_limit_upload_max_requests.max(1);
    let window = Duration::from_secs(state.config.rate_limit_upload_window_seconds.max(1));

    let denied = {
        let mut windows = upload_windows().lock().unwrap_or_else(|e| e.into_inner());
        take_upload_slot(&mut windows, key, max_uploads, window, Instant::now()).err()
    };

    if let Some(retry_after) = denied {
        return AppError::RateLimited { retry_after }.into_response();
    }

    next.run(request).await
}

/// Books one upload against the account's window, rolling the window over
/// once its period has elapsed. On rejection returns the seconds left until
/// the window resets.
fn take_upload_slot(
    windows: &mut HashMap<String, UploadWindow>,
    key: String,
    max_uploads: u32,
    window: Duration,
    now: Instant,
) -> Result<(), u64> {
    if windows.len() > WINDOW_SWEEP_LEN {
        windows.retain(|_, entry| now.duration_since(entry.started_at) < window);
    }

    let entry = windows.entry(key).or_insert(UploadWindow {
        started_at: now,
        used: 0,
    });
    if now.duration_since(entry.started_at) >= window {
        entry.started_at = now;
        entry.used = 0;
    }

    if entry.used >= max_uploads {
        let remaining = window.saturating_sub(now.duration_since(entry.started_at));
        return Err(remaining.as_secs().max(1));
    }

    entry.used += 1;
    Ok(())
}

/// Per-IP limiter mounted on the login route.
pub fn create_auth_rate_limiter(
    config: &Config,
) -> GovernorLayer<PeerIpKeyExtractor, StateInformationMiddleware, Body> {
    let burst_size = config.rate_limit_ip_max_requests.max(1);
    let window_seconds = config.rate_limit_ip_window_seconds.max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(Duration::from_secs(window_seconds))
            .burst_size(burst_size)
            .key_extractor(PeerIpKeyExtractor)
            .use_headers()
            .finish()
            .expect("rate limiter config should be valid"),
    );

    GovernorLayer::new(governor_conf).error_handler(rate_limit_error_handler)
}

fn rate_limit_error_handler(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::warn!(wait_time, "Rate limit exceeded");
            let mut response = AppError::RateLimited {
                retry_after: wait_time,
            }
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => AppError::InternalServerError(anyhow::anyhow!(
            "Unable to determine request identity"
        ))
        .into_response(),
        GovernorError::Other { code, msg, headers } => {
            let body = Json(ErrorResponse {
                error: msg.unwrap_or_else(|| "Rate limit error".to_string()),
                code: "RATE_LIMITED".to_string(),
                details: None,
            });
            let mut response = (code, body).into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}
