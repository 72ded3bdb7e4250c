use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ses_backend::config::Config;
use ses_backend::db::connection::{create_pool, DbPool};
use ses_backend::docs::ApiDoc;
use ses_backend::state::AppState;
use ses_backend::{handlers, middleware, storage};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{prefix}*** (len={})", s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ses_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database_url,
        port = config.port,
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        time_zone = %config.time_zone,
        storage_configured = config.storage.is_some(),
        max_upload_bytes = config.max_upload_bytes,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool: DbPool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Connect object storage when the S3 environment is complete. Without it
    // the portal still serves LINK evidence; FILE uploads return 500.
    let object_storage = match &config.storage {
        Some(storage_config) => Some(storage::connect(storage_config).await),
        None => {
            tracing::warn!("S3 is not configured; FILE uploads and downloads are disabled");
            None
        }
    };

    let state = AppState::new(pool, object_storage, config.clone());

    // Build public routes (no auth): taxonomy lookups for the submission form
    let public_routes = Router::new()
        .route("/api/axes", get(handlers::taxonomy::get_axes))
        .route("/api/domains", get(handlers::taxonomy::get_domains))
        .route("/api/standards", get(handlers::taxonomy::get_standards))
        .route("/api/indicators", get(handlers::taxonomy::get_indicators));

    // Login gets its own router so the per-IP limiter covers nothing else
    let login_routes = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .layer(middleware::create_auth_rate_limiter(&config));

    // Build user-protected routes (auth required)
    let user_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/evidence", get(handlers::evidence::list_evidence))
        .route(
            "/api/evidence/{id}",
            delete(handlers::evidence::delete_evidence),
        )
        .route(
            "/api/evidence/{id}/download",
            get(handlers::evidence::download_evidence),
        )
        .route("/api/reports/stats", get(handlers::reports::get_stats))
        .route(
            "/api/reports/recent",
            get(handlers::reports::get_recent_evidence),
        )
        .route(
            "/api/reports/export",
            get(handlers::reports::export_evidence),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    // Upload routes: auth runs first, then the per-account limiter keyed on
    // the authenticated user. The body cap leaves slack above the service
    // limit so oversize files get the size message instead of a bare 413.
    let upload_routes = Router::new()
        .route(
            "/api/evidence/upload-url",
            post(handlers::evidence::create_upload_url),
        )
        .route(
            "/api/evidence/upload",
            post(handlers::evidence::upload_evidence),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_bytes + 1024 * 1024))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::upload_rate_limit,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    // Build manager-protected routes (auth + System Manager role)
    let manager_routes = Router::new()
        .route(
            "/api/evidence/{id}/review",
            patch(handlers::evidence::review_evidence),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_manager,
        ));

    // Compose app with shared layers (CORS/Trace) and shared state
    let app = Router::new()
        .merge(public_routes)
        .merge(login_routes)
        .merge(user_routes)
        .merge(upload_routes)
        .merge(manager_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    // The login limiter keys on the peer address, so serve with connect info.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
