//! Object storage behind a trait so handlers and tests never talk to S3
//! directly. The live implementation presigns against the configured bucket.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use uuid::Uuid;

pub const EVIDENCE_PREFIX: &str = "evidence";

const DEFAULT_EXTENSION: &str = "bin";

/// Bucket coordinates resolved from the environment. Credentials stay in the
/// AWS SDK credential chain and never travel through this struct.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageConfig {
    pub region: String,
    pub bucket: String,
    pub endpoint_url: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Presigned PUT URL a client can upload one object to before it expires.
    async fn presign_upload(&self, key: &str, content_type: &str, ttl: Duration)
        -> Result<String>;

    /// Presigned GET URL for a stored object.
    async fn presign_download(&self, key: &str, ttl: Duration) -> Result<String>;

    /// Server-side upload for clients that post the bytes directly.
    async fn put_object(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<()>;

    async fn delete_object(&self, key: &str) -> Result<()>;
}

/// Storage key for a fresh upload: `evidence/<uuid>.<ext>`. The extension is
/// taken from the client filename, falling back to `bin` when there is none.
pub fn object_key(filename: &str) -> String {
    format!(
        "{}/{}.{}",
        EVIDENCE_PREFIX,
        Uuid::new_v4(),
        file_extension(filename)
    )
}

fn file_extension(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
}

pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub async fn connect(config: &StorageConfig) -> Self {
        let region_provider =
            RegionProviderChain::default_provider().or_else(Region::new(config.region.clone()));
        let aws_config = aws_config::from_env().region(region_provider).load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            // Path-style addressing is what MinIO-style endpoints expect.
            builder = builder.force_path_style(true).endpoint_url(endpoint_url);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn presign_upload(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|err| anyhow!("Invalid presign TTL: {err}"))?;
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await?;
        Ok(request.uri().to_string())
    }

    async fn presign_download(&self, key: &str, ttl: Duration) -> Result<String> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|err| anyhow!("Invalid presign TTL: {err}"))?;
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await?;
        Ok(request.uri().to_string())
    }

    async fn put_object(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}

pub async fn connect(config: &StorageConfig) -> Arc<dyn ObjectStorage> {
    Arc::new(S3Storage::connect(config).await)
}
