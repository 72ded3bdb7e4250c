use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;

use crate::storage::StorageConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub time_zone: Tz,
    /// Object storage settings. `None` when the S3 environment is incomplete,
    /// which disables FILE uploads while LINK submissions stay available.
    pub storage: Option<StorageConfig>,
    pub upload_url_ttl_secs: u64,
    pub download_url_ttl_secs: u64,
    pub max_upload_bytes: usize,
    pub rate_limit_ip_max_requests: u32,
    pub rate_limit_ip_window_seconds: u64,
    pub rate_limit_upload_max_requests: u32,
    pub rate_limit_upload_window_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow!("DATABASE_URL must be set"))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(50 * 1024 * 1024);

        Ok(Config {
            database_url,
            port,
            jwt_secret,
            jwt_expiration_hours,
            time_zone,
            storage: storage_config_from_env(),
            upload_url_ttl_secs: parse_env_u64("UPLOAD_URL_TTL_SECS", 3600),
            download_url_ttl_secs: parse_env_u64("DOWNLOAD_URL_TTL_SECS", 3600),
            max_upload_bytes,
            rate_limit_ip_max_requests: parse_env_u64("RATE_LIMIT_IP_MAX_REQUESTS", 10) as u32,
            rate_limit_ip_window_seconds: parse_env_u64("RATE_LIMIT_IP_WINDOW_SECONDS", 60),
            rate_limit_upload_max_requests: parse_env_u64("RATE_LIMIT_UPLOAD_MAX_REQUESTS", 30)
                as u32,
            rate_limit_upload_window_seconds: parse_env_u64(
                "RATE_LIMIT_UPLOAD_WINDOW_SECONDS",
                3600,
            ),
        })
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Storage counts as configured only when every required S3 variable is
/// present and non-empty. Credentials themselves stay in the environment for
/// the AWS SDK credential chain; only region/bucket/endpoint travel in config.
fn storage_config_from_env() -> Option<StorageConfig> {
    non_empty_env("AWS_ACCESS_KEY_ID")?;
    non_empty_env("AWS_SECRET_ACCESS_KEY")?;
    let region = non_empty_env("AWS_REGION")?;
    let bucket = non_empty_env("S3_BUCKET_NAME")?;
    let endpoint_url = non_empty_env("S3_ENDPOINT_URL");

    Some(StorageConfig {
        region,
        bucket,
        endpoint_url,
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
