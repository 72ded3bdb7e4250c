use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::{
        evidence::{
            CreateEvidenceInput, DeleteEvidenceResponse, DownloadUrlResponse,
            EvidenceListQuery, EvidenceListResponse, EvidenceMessageResponse, EvidenceStatus,
            EvidenceType, FileSource, PaginationInfo, ReviewPayload, UploadUrlRequest,
            UploadUrlResponse,
        },
        user::User,
    },
    repositories::evidence::{self as evidence_repo, EvidenceFilters},
    services::EvidenceService,
    state::AppState,
    validation::Validate,
};

pub async fn list_evidence(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
    Query(query): Query<EvidenceListQuery>,
) -> Result<Json<EvidenceListResponse>, AppError> {
    let page = query.page();
    let limit = query.limit();
    let offset = i64::from(page - 1) * i64::from(limit);
    let filters = EvidenceFilters {
        status: query.status_filter(),
        domain_id: query.domain_id,
        standard_id: query.standard_id,
    };

    let (evidence, total) =
        evidence_repo::list_evidence(&state.pool, &filters, i64::from(limit), offset).await?;

    Ok(Json(EvidenceListResponse {
        evidence,
        pagination: PaginationInfo::new(page, limit, total),
    }))
}

/// First phase of the direct-to-storage upload. The storage check comes
/// before payload validation so an unconfigured deployment answers the same
/// way regardless of body contents.
pub async fn create_upload_url(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
    Json(payload): Json<UploadUrlRequest>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    if !state.storage_configured() {
        return Err(AppError::StorageNotConfigured);
    }
    payload.validate()?;

    let service = EvidenceService::from_state(&state);
    let slot = service
        .create_upload_slot(&payload.filename, &payload.content_type)
        .await?;
    Ok(Json(slot))
}

pub async fn upload_evidence(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<EvidenceMessageResponse>), AppError> {
    let input = read_upload_form(multipart).await?;
    let service = EvidenceService::from_state(&state);
    let evidence = service.create(input, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(EvidenceMessageResponse {
            message: "Evidence uploaded successfully".to_string(),
            evidence,
        }),
    ))
}

pub async fn review_evidence(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(payload): Json<ReviewPayload>,
) -> Result<Json<EvidenceMessageResponse>, AppError> {
    let status = EvidenceStatus::parse(&payload.status)
        .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?;
    let notes = payload.notes.filter(|notes| !notes.is_empty());

    let service = EvidenceService::from_state(&state);
    let evidence = service.review(&id, status, notes, &user).await?;

    Ok(Json(EvidenceMessageResponse {
        message: "Evidence status updated successfully".to_string(),
        evidence,
    }))
}

pub async fn delete_evidence(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<DeleteEvidenceResponse>, AppError> {
    let service = EvidenceService::from_state(&state);
    service.delete(&id, &user).await?;
    Ok(Json(DeleteEvidenceResponse { success: true }))
}

pub async fn download_evidence(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<DownloadUrlResponse>, AppError> {
    let service = EvidenceService::from_state(&state);
    let download_url = service.download_url(&id).await?;
    Ok(Json(DownloadUrlResponse { download_url }))
}

/// Collects the multipart form into a typed submission. Text fields sent
/// empty are treated as absent; an unreadable part or an unknown `type`
/// value fails the whole form.
async fn read_upload_form(mut multipart: Multipart) -> Result<CreateEvidenceInput, AppError> {
    let mut title = String::new();
    let mut description = None;
    let mut domain_id = String::new();
    let mut standard_id = String::new();
    let mut indicator_id = None;
    let mut evidence_type = None;
    let mut stored_key = None;
    let mut url = None;
    let mut inline_file = None;

    while let Some(field) = next_form_field(&mut multipart).await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "title" => title = read_text_field(field, &name).await?,
            "description" => description = non_empty(read_text_field(field, &name).await?),
            "domainId" => domain_id = read_text_field(field, &name).await?,
            "standardId" => standard_id = read_text_field(field, &name).await?,
            "indicatorId" => indicator_id = non_empty(read_text_field(field, &name).await?),
            "type" => evidence_type = Some(read_text_field(field, &name).await?),
            "filePath" => stored_key = non_empty(read_text_field(field, &name).await?),
            "url" => url = non_empty(read_text_field(field, &name).await?),
            "file" => {
                let filename = field
                    .file_name()
                    .unwrap_or("upload.bin")
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|err| {
                    AppError::BadRequest(format!("Failed to read uploaded file: {err}"))
                })?;
                inline_file = Some(FileSource::Inline {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let evidence_type = match evidence_type.as_deref() {
        Some("FILE") => EvidenceType::File,
        Some("LINK") => EvidenceType::Link,
        _ => {
            return Err(AppError::Validation(vec![
                "type: Evidence type must be FILE or LINK".to_string(),
            ]));
        }
    };

    // A stored key from the presigned flow wins over inline bytes.
    let file = stored_key.map(FileSource::StoredKey).or(inline_file);

    Ok(CreateEvidenceInput {
        title,
        description,
        domain_id,
        standard_id,
        indicator_id,
        evidence_type,
        file,
        url,
    })
}

async fn next_form_field(
    multipart: &mut Multipart,
) -> Result<Option<axum::extract::multipart::Field<'_>>, AppError> {
    multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Invalid multipart payload: {err}")))
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|err| AppError::BadRequest(format!("Failed to read field {name}: {err}")))
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_values_are_treated_as_absent() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }
}
