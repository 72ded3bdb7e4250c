use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::SecondsFormat;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::{
        evidence::EvidenceType,
        reports::{RecentEvidenceResponse, StatsResponse},
        user::User,
    },
    repositories::reports::{self as reports_repo, ExportRow},
    state::AppState,
    utils::{csv::append_csv_row, time},
};

const DEFAULT_RECENT_LIMIT: u32 = 5;
const MAX_RECENT_LIMIT: u32 = 50;

const EXPORT_COLUMNS: [&str; 19] = [
    "ID",
    "Title",
    "Description",
    "Axis (EN)",
    "Axis (AR)",
    "Domain (EN)",
    "Domain (AR)",
    "Standard Code",
    "Standard (EN)",
    "Standard (AR)",
    "Type",
    "Status",
    "Submitted By",
    "Submitted Email",
    "Submitted At",
    "Reviewed By",
    "Reviewed At",
    "Notes",
    "File/URL",
];

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
) -> Result<Json<StatsResponse>, AppError> {
    let counts = reports_repo::fetch_status_counts(&state.pool).await?;
    let evidence_by_domain = reports_repo::count_by_domain(&state.pool).await?;

    Ok(Json(StatsResponse {
        total_evidence: counts.total,
        approved_evidence: counts.approved,
        rejected_evidence: counts.rejected,
        under_review_evidence: counts.under_review,
        evidence_by_domain,
    }))
}

pub async fn get_recent_evidence(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<RecentEvidenceResponse>, AppError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);
    let evidence = reports_repo::fetch_recent(&state.pool, i64::from(limit)).await?;
    Ok(Json(RecentEvidenceResponse { evidence }))
}

/// Serves the full evidence register as a CSV attachment, one row per
/// record, named after the current date in the configured timezone.
pub async fn export_evidence(
    State(state): State<AppState>,
    Extension(_user): Extension<User>,
) -> Result<Response, AppError> {
    let rows = reports_repo::fetch_export_rows(&state.pool).await?;
    let csv_data = build_export_csv(&rows);

    let filename = format!(
        "evidence-report-{}.csv",
        time::today_local(&state.config.time_zone).format("%Y-%m-%d")
    );
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, csv_data).into_response())
}

fn build_export_csv(rows: &[ExportRow]) -> String {
    let mut csv_data = String::new();
    append_csv_row(
        &mut csv_data,
        &EXPORT_COLUMNS.map(str::to_string),
    );

    for row in rows {
        let source = match row.evidence_type {
            EvidenceType::File => row.file_path.as_deref(),
            EvidenceType::Link => row.url.as_deref(),
        };
        append_csv_row(
            &mut csv_data,
            &[
                row.id.clone(),
                row.title.clone(),
                row.description.clone().unwrap_or_default(),
                row.axis_name_en.clone(),
                row.axis_name_ar.clone(),
                row.domain_name_en.clone(),
                row.domain_name_ar.clone(),
                row.standard_code.clone(),
                row.standard_name_en.clone(),
                row.standard_name_ar.clone(),
                row.evidence_type.as_str().to_string(),
                row.status.as_str().to_string(),
                row.submitted_by_name.clone(),
                row.submitted_by_email.clone(),
                row.submitted_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                row.reviewed_by_name.clone().unwrap_or_default(),
                row.reviewed_at
                    .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
                    .unwrap_or_default(),
                row.notes.clone().unwrap_or_default(),
                source.unwrap_or_default().to_string(),
            ],
        );
    }

    csv_data
}
