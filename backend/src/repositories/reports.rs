//! Aggregate queries behind the reporting endpoints.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::evidence::{EvidenceStatus, EvidenceType};
use crate::models::reports::{DomainCount, RecentEvidenceItem};
use crate::models::taxonomy::{DomainSummary, StandardSummary};

#[derive(Debug, Clone, Copy, FromRow)]
/// Portal-wide evidence counts, one row.
pub struct StatusCounts {
    pub total: i64,
    pub approved: i64,
    pub rejected: i64,
    pub under_review: i64,
}

#[derive(Debug, Clone, FromRow)]
/// Fully joined evidence row for the CSV export.
pub struct ExportRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub axis_name_en: String,
    pub axis_name_ar: String,
    pub domain_name_en: String,
    pub domain_name_ar: String,
    pub standard_code: String,
    pub standard_name_en: String,
    pub standard_name_ar: String,
    pub evidence_type: EvidenceType,
    pub status: EvidenceStatus,
    pub submitted_by_name: String,
    pub submitted_by_email: String,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by_name: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub file_path: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, FromRow)]
struct RecentRow {
    id: String,
    title: String,
    status: EvidenceStatus,
    submitted_at: DateTime<Utc>,
    domain_id: String,
    domain_name_en: String,
    domain_name_ar: String,
    standard_id: String,
    standard_code: String,
    standard_name_en: String,
    standard_name_ar: String,
}

impl From<RecentRow> for RecentEvidenceItem {
    fn from(row: RecentRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            status: row.status,
            submitted_at: row.submitted_at,
            domain: DomainSummary {
                id: row.domain_id,
                name_en: row.domain_name_en,
                name_ar: row.domain_name_ar,
            },
            standard: StandardSummary {
                id: row.standard_id,
                code: row.standard_code,
                name_en: row.standard_name_en,
                name_ar: row.standard_name_ar,
            },
        }
    }
}

pub async fn fetch_status_counts(pool: &PgPool) -> Result<StatusCounts, sqlx::Error> {
    sqlx::query_as::<_, StatusCounts>(
        "SELECT COUNT(*) AS total, \
         COUNT(*) FILTER (WHERE status = 'APPROVED') AS approved, \
         COUNT(*) FILTER (WHERE status = 'REJECTED') AS rejected, \
         COUNT(*) FILTER (WHERE status = 'UNDER_REVIEW') AS under_review \
         FROM evidence",
    )
    .fetch_one(pool)
    .await
}

/// Evidence volume per domain, busiest first. The LEFT JOIN keeps empty
/// domains in the result so dashboards can show the whole taxonomy.
pub async fn count_by_domain(pool: &PgPool) -> Result<Vec<DomainCount>, sqlx::Error> {
    sqlx::query_as::<_, DomainCount>(
        "SELECT d.id AS domain_id, d.name_en, d.name_ar, COUNT(e.id) AS count \
         FROM domains d \
         LEFT JOIN evidence e ON e.domain_id = d.id \
         GROUP BY d.id, d.name_en, d.name_ar \
         ORDER BY count DESC, d.name_en ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_recent(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<RecentEvidenceItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RecentRow>(
        "SELECT e.id, e.title, e.status, e.submitted_at, \
         d.id AS domain_id, d.name_en AS domain_name_en, d.name_ar AS domain_name_ar, \
         s.id AS standard_id, s.code AS standard_code, \
         s.name_en AS standard_name_en, s.name_ar AS standard_name_ar \
         FROM evidence e \
         JOIN domains d ON d.id = e.domain_id \
         JOIN standards s ON s.id = e.standard_id \
         ORDER BY e.submitted_at DESC, e.id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(RecentEvidenceItem::from).collect())
}

pub async fn fetch_export_rows(pool: &PgPool) -> Result<Vec<ExportRow>, sqlx::Error> {
    sqlx::query_as::<_, ExportRow>(
        "SELECT e.id, e.title, e.description, \
         a.name_en AS axis_name_en, a.name_ar AS axis_name_ar, \
         d.name_en AS domain_name_en, d.name_ar AS domain_name_ar, \
         s.code AS standard_code, s.name_en AS standard_name_en, s.name_ar AS standard_name_ar, \
         e.evidence_type, e.status, \
         su.name AS submitted_by_name, su.email AS submitted_by_email, e.submitted_at, \
         ru.name AS reviewed_by_name, e.reviewed_at, e.notes, e.file_path, e.url \
         FROM evidence e \
         JOIN domains d ON d.id = e.domain_id \
         JOIN axes a ON a.id = d.axis_id \
         JOIN standards s ON s.id = e.standard_id \
         JOIN users su ON su.id = e.submitted_by_id \
         LEFT JOIN users ru ON ru.id = e.reviewed_by_id \
         ORDER BY e.submitted_at DESC, e.id DESC",
    )
    .fetch_all(pool)
    .await
}
