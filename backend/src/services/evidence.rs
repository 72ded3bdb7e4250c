//! Evidence workflows: submission, review decisions, deletion, and the
//! presigned-URL handoffs to object storage. Every mutation lands together
//! with its activity-trail entry; storage cleanup is best effort and never
//! blocks a delete.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::{
    config::Config,
    error::AppError,
    models::{
        activity_log::{ActivityAction, ActivityLog},
        evidence::{
            CreateEvidenceInput, Evidence, EvidenceResponse, EvidenceStatus, EvidenceType,
            FileSource, UploadUrlResponse,
        },
        user::User,
    },
    repositories::{evidence as evidence_repo, taxonomy as taxonomy_repo},
    state::AppState,
    storage::{object_key, ObjectStorage},
    validation::{self, rules, Validate},
};

#[derive(Clone)]
pub struct EvidenceService {
    pool: PgPool,
    storage: Option<Arc<dyn ObjectStorage>>,
    upload_url_ttl: Duration,
    download_url_ttl: Duration,
    max_upload_bytes: usize,
}

impl EvidenceService {
    pub fn new(pool: PgPool, storage: Option<Arc<dyn ObjectStorage>>, config: &Config) -> Self {
        Self {
            pool,
            storage,
            upload_url_ttl: Duration::from_secs(config.upload_url_ttl_secs),
            download_url_ttl: Duration::from_secs(config.download_url_ttl_secs),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.pool.clone(), state.storage.clone(), &state.config)
    }

    /// Validates and stores a new submission. Inline file bytes are written
    /// to object storage before the record; two-phase uploads only reference
    /// the key the client already uploaded to.
    pub async fn create(
        &self,
        input: CreateEvidenceInput,
        submitter: &User,
    ) -> Result<EvidenceResponse, AppError> {
        let mut problems = match input.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation::error_messages(&errors),
        };
        problems.extend(rules::evidence_source_violations(
            input.evidence_type,
            input.file.is_some(),
            input.url.is_some(),
        ));
        if !problems.is_empty() {
            return Err(AppError::Validation(problems));
        }

        if let Some(FileSource::Inline { bytes, .. }) = &input.file {
            if bytes.len() > self.max_upload_bytes {
                return Err(AppError::Validation(vec![format!(
                    "file: File size exceeds {}MB limit",
                    self.max_upload_bytes / (1024 * 1024)
                )]));
            }
            if self.storage.is_none() {
                return Err(AppError::StorageNotConfigured);
            }
        }

        self.check_taxonomy_refs(&input).await?;

        let file_path = match (input.evidence_type, input.file) {
            (EvidenceType::File, Some(FileSource::StoredKey(key))) => Some(key),
            (
                EvidenceType::File,
                Some(FileSource::Inline {
                    filename,
                    content_type,
                    bytes,
                }),
            ) => Some(
                self.store_inline_file(&filename, &content_type, bytes)
                    .await?,
            ),
            _ => None,
        };

        let evidence = Evidence::new(
            input.title,
            input.description,
            input.domain_id,
            input.standard_id,
            input.indicator_id,
            input.evidence_type,
            file_path,
            input.url,
            submitter.id.clone(),
        );
        let log = ActivityLog::new(
            submitter.id.clone(),
            ActivityAction::EvidenceUploaded,
            json!({
                "evidenceId": evidence.id,
                "title": evidence.title,
                "type": evidence.evidence_type,
            }),
        );
        evidence_repo::insert_evidence_with_log(&self.pool, &evidence, &log).await?;

        self.loaded_detail(&evidence.id).await
    }

    /// Applies a reviewer decision. Transitions are unrestricted, so a
    /// decision can be revised later; the latest write wins. `notes` replaces
    /// the stored notes wholesale, clearing them when absent.
    pub async fn review(
        &self,
        id: &str,
        status: EvidenceStatus,
        notes: Option<String>,
        reviewer: &User,
    ) -> Result<EvidenceResponse, AppError> {
        if !reviewer.is_system_manager() {
            return Err(AppError::Forbidden(
                "Access denied. System Manager role required.".to_string(),
            ));
        }

        let current = evidence_repo::fetch_evidence(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Evidence not found".to_string()))?;

        let log = ActivityLog::new(
            reviewer.id.clone(),
            ActivityAction::EvidenceReviewed,
            json!({
                "evidenceId": current.id,
                "title": current.title,
                "oldStatus": current.status,
                "newStatus": status,
                "notes": notes,
            }),
        );
        let updated = evidence_repo::apply_review_with_log(
            &self.pool,
            id,
            status,
            notes.as_deref(),
            &reviewer.id,
            Utc::now(),
            &log,
        )
        .await?;
        if !updated {
            return Err(AppError::NotFound("Evidence not found".to_string()));
        }

        self.loaded_detail(id).await
    }

    /// Removes a submission. Submitters may delete their own records;
    /// managers may delete any. A failing object-store delete is logged and
    /// swallowed so the database row always goes away.
    pub async fn delete(&self, id: &str, acting_user: &User) -> Result<(), AppError> {
        let current = evidence_repo::fetch_evidence(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Evidence not found".to_string()))?;

        let can_delete =
            current.submitted_by_id == acting_user.id || acting_user.is_system_manager();
        if !can_delete {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }

        if current.evidence_type == EvidenceType::File {
            if let Some(key) = current.file_path.as_deref() {
                match self.storage.as_ref() {
                    Some(storage) => {
                        if let Err(err) = storage.delete_object(key).await {
                            tracing::warn!(
                                key,
                                error = %err,
                                "Failed to delete stored object; removing the record anyway"
                            );
                        }
                    }
                    None => {
                        tracing::warn!(
                            key,
                            "Object storage not configured; stored object left behind"
                        );
                    }
                }
            }
        }

        let log = ActivityLog::new(
            acting_user.id.clone(),
            ActivityAction::EvidenceDeleted,
            json!({
                "evidenceId": current.id,
                "title": current.title,
                "type": current.evidence_type,
            }),
        );
        let deleted = evidence_repo::delete_evidence_with_log(&self.pool, id, &log).await?;
        if !deleted {
            return Err(AppError::NotFound("Evidence not found".to_string()));
        }
        Ok(())
    }

    /// Resolves where a record's payload can be fetched from: the stored URL
    /// for LINK records, a short-lived presigned GET for FILE records.
    pub async fn download_url(&self, id: &str) -> Result<String, AppError> {
        let record = evidence_repo::fetch_evidence(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Evidence not found".to_string()))?;

        match (record.evidence_type, record.url, record.file_path) {
            (EvidenceType::Link, Some(url), _) => Ok(url),
            (EvidenceType::File, _, Some(key)) => {
                let storage = self
                    .storage
                    .as_ref()
                    .ok_or(AppError::StorageNotConfigured)?;
                storage
                    .presign_download(&key, self.download_url_ttl)
                    .await
                    .map_err(|err| AppError::Storage(err.to_string()))
            }
            _ => Err(AppError::BadRequest(
                "No file or URL available".to_string(),
            )),
        }
    }

    /// First phase of the two-phase upload: mint an object key and a
    /// presigned PUT the client uploads to directly.
    pub async fn create_upload_slot(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadUrlResponse, AppError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(AppError::StorageNotConfigured)?;
        let key = object_key(filename);
        let upload_url = storage
            .presign_upload(&key, content_type, self.upload_url_ttl)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))?;
        Ok(UploadUrlResponse { upload_url, key })
    }

    async fn check_taxonomy_refs(&self, input: &CreateEvidenceInput) -> Result<(), AppError> {
        let mut problems = Vec::new();
        if !taxonomy_repo::domain_exists(&self.pool, &input.domain_id).await? {
            problems.push("domain_id: Unknown domain".to_string());
        }
        if !taxonomy_repo::standard_exists(&self.pool, &input.standard_id).await? {
            problems.push("standard_id: Unknown standard".to_string());
        }
        if let Some(indicator_id) = input.indicator_id.as_ref() {
            if !taxonomy_repo::indicator_exists(&self.pool, indicator_id).await? {
                problems.push("indicator_id: Unknown indicator".to_string());
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(problems))
        }
    }

    async fn store_inline_file(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(AppError::StorageNotConfigured)?;
        let key = object_key(filename);
        storage
            .put_object(&key, content_type, bytes)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))?;
        Ok(key)
    }

    async fn loaded_detail(&self, id: &str) -> Result<EvidenceResponse, AppError> {
        evidence_repo::fetch_evidence_detail(&self.pool, id)
            .await?
            .ok_or_else(|| {
                AppError::InternalServerError(anyhow::anyhow!("evidence row missing after write"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use crate::storage::MockObjectStorage;
    use sqlx::postgres::PgPoolOptions;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            port: 3000,
            jwt_secret: "test-secret-key".to_string(),
            jwt_expiration_hours: 1,
            time_zone: chrono_tz::UTC,
            storage: None,
            upload_url_ttl_secs: 3600,
            download_url_ttl_secs: 1800,
            max_upload_bytes: 1024 * 1024,
            rate_limit_ip_max_requests: 10,
            rate_limit_ip_window_seconds: 60,
            rate_limit_upload_max_requests: 30,
            rate_limit_upload_window_seconds: 3600,
        }
    }

    fn test_service(storage: Option<Arc<dyn ObjectStorage>>) -> EvidenceService {
        let config = test_config();
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.database_url)
            .expect("create lazy pool");
        EvidenceService::new(pool, storage, &config)
    }

    fn submitter() -> User {
        User::new(
            "teacher@school.test".to_string(),
            "Teacher".to_string(),
            "hash".to_string(),
            UserRole::Submitter,
        )
    }

    fn link_input() -> CreateEvidenceInput {
        CreateEvidenceInput {
            title: "Reading scores 2025".to_string(),
            description: None,
            domain_id: "d1".to_string(),
            standard_id: "s1".to_string(),
            indicator_id: None,
            evidence_type: EvidenceType::Link,
            file: None,
            url: Some("https://example.com/report".to_string()),
        }
    }

    #[tokio::test]
    async fn create_rejects_inconsistent_payloads_before_any_io() {
        let service = test_service(None);
        let input = CreateEvidenceInput {
            title: "ab".to_string(),
            url: None,
            ..link_input()
        };

        let err = service.create(input, &submitter()).await.unwrap_err();
        match err {
            AppError::Validation(problems) => {
                assert!(problems.iter().any(|p| p.contains("at least 3")));
                assert!(problems.iter().any(|p| p.contains("URL is required")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_rejects_oversize_inline_files_before_upload() {
        let service = test_service(None);
        let input = CreateEvidenceInput {
            evidence_type: EvidenceType::File,
            url: None,
            file: Some(FileSource::Inline {
                filename: "big.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![0u8; 2 * 1024 * 1024],
            }),
            ..link_input()
        };

        let err = service.create(input, &submitter()).await.unwrap_err();
        match err {
            AppError::Validation(problems) => {
                assert!(problems[0].contains("File size exceeds 1MB limit"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_requires_storage_for_inline_files() {
        let service = test_service(None);
        let input = CreateEvidenceInput {
            evidence_type: EvidenceType::File,
            url: None,
            file: Some(FileSource::Inline {
                filename: "small.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![0u8; 16],
            }),
            ..link_input()
        };

        let err = service.create(input, &submitter()).await.unwrap_err();
        assert!(matches!(err, AppError::StorageNotConfigured));
    }

    #[tokio::test]
    async fn review_requires_the_manager_role() {
        let service = test_service(None);
        let err = service
            .review("e1", EvidenceStatus::Approved, None, &submitter())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn upload_slot_without_storage_is_a_configuration_error() {
        let service = test_service(None);
        let err = service
            .create_upload_slot("report.pdf", "application/pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::StorageNotConfigured));
    }

    #[tokio::test]
    async fn upload_slot_presigns_a_key_under_the_evidence_prefix() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_presign_upload()
            .withf(|key, content_type, ttl| {
                key.starts_with("evidence/")
                    && key.ends_with(".pdf")
                    && content_type == "application/pdf"
                    && *ttl == Duration::from_secs(3600)
            })
            .returning(|_, _, _| Ok("https://signed.example/upload".to_string()));
        let service = test_service(Some(Arc::new(storage)));

        let slot = service
            .create_upload_slot("report.pdf", "application/pdf")
            .await
            .expect("upload slot");
        assert_eq!(slot.upload_url, "https://signed.example/upload");
        assert!(slot.key.starts_with("evidence/"));
        assert!(slot.key.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn upload_slot_surfaces_presign_failures_as_storage_errors() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_presign_upload()
            .returning(|_, _, _| Err(anyhow::anyhow!("presign failed")));
        let service = test_service(Some(Arc::new(storage)));

        let err = service
            .create_upload_slot("report.pdf", "application/pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
