//! Repository functions for evidence records.
//!
//! Reads return the record joined with its taxonomy and submitter context;
//! writes that must land together with their activity-trail entry run inside
//! one transaction.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::models::activity_log::ActivityLog;
use crate::models::evidence::{Evidence, EvidenceResponse, EvidenceStatus, UserSummary};
use crate::models::taxonomy::{DomainSummary, IndicatorSummary, StandardSummary};
use crate::repositories::activity_log::insert_activity_log;

#[derive(Debug, Clone, Default)]
pub struct EvidenceFilters {
    pub status: Option<EvidenceStatus>,
    pub domain_id: Option<String>,
    pub standard_id: Option<String>,
}

/// Columns of the joined evidence read, shared by the single fetch and the
/// filtered listing.
const DETAIL_SELECT: &str = "SELECT e.id, e.title, e.description, e.domain_id, e.standard_id, \
     e.indicator_id, e.evidence_type, e.file_path, e.url, e.status, e.notes, \
     e.submitted_by_id, e.submitted_at, e.reviewed_by_id, e.reviewed_at, \
     d.name_en AS domain_name_en, d.name_ar AS domain_name_ar, \
     s.code AS standard_code, s.name_en AS standard_name_en, s.name_ar AS standard_name_ar, \
     i.code AS indicator_code, i.description_en AS indicator_description_en, \
     i.description_ar AS indicator_description_ar, \
     u.name AS submitted_by_name, u.email AS submitted_by_email \
     FROM evidence e \
     JOIN domains d ON d.id = e.domain_id \
     JOIN standards s ON s.id = e.standard_id \
     LEFT JOIN indicators i ON i.id = e.indicator_id \
     JOIN users u ON u.id = e.submitted_by_id";

#[derive(Debug, FromRow)]
struct EvidenceDetailRow {
    id: String,
    title: String,
    description: Option<String>,
    domain_id: String,
    standard_id: String,
    indicator_id: Option<String>,
    evidence_type: crate::models::evidence::EvidenceType,
    file_path: Option<String>,
    url: Option<String>,
    status: EvidenceStatus,
    notes: Option<String>,
    submitted_by_id: String,
    submitted_at: DateTime<Utc>,
    reviewed_by_id: Option<String>,
    reviewed_at: Option<DateTime<Utc>>,
    domain_name_en: String,
    domain_name_ar: String,
    standard_code: String,
    standard_name_en: String,
    standard_name_ar: String,
    indicator_code: Option<String>,
    indicator_description_en: Option<String>,
    indicator_description_ar: Option<String>,
    submitted_by_name: String,
    submitted_by_email: String,
}

impl From<EvidenceDetailRow> for EvidenceResponse {
    fn from(row: EvidenceDetailRow) -> Self {
        let indicator = row.indicator_id.clone().map(|id| IndicatorSummary {
            id,
            code: row.indicator_code.unwrap_or_default(),
            description_en: row.indicator_description_en,
            description_ar: row.indicator_description_ar,
        });
        EvidenceResponse {
            id: row.id,
            title: row.title,
            description: row.description,
            domain: DomainSummary {
                id: row.domain_id.clone(),
                name_en: row.domain_name_en,
                name_ar: row.domain_name_ar,
            },
            standard: StandardSummary {
                id: row.standard_id.clone(),
                code: row.standard_code,
                name_en: row.standard_name_en,
                name_ar: row.standard_name_ar,
            },
            indicator,
            submitted_by: UserSummary {
                id: row.submitted_by_id.clone(),
                name: row.submitted_by_name,
                email: row.submitted_by_email,
            },
            domain_id: row.domain_id,
            standard_id: row.standard_id,
            indicator_id: row.indicator_id,
            evidence_type: row.evidence_type,
            file_path: row.file_path,
            url: row.url,
            status: row.status,
            notes: row.notes,
            submitted_by_id: row.submitted_by_id,
            submitted_at: row.submitted_at,
            reviewed_by_id: row.reviewed_by_id,
            reviewed_at: row.reviewed_at,
        }
    }
}

pub async fn fetch_evidence(pool: &PgPool, id: &str) -> Result<Option<Evidence>, sqlx::Error> {
    sqlx::query_as::<_, Evidence>(
        "SELECT id, title, description, domain_id, standard_id, indicator_id, evidence_type, \
         file_path, url, status, notes, submitted_by_id, submitted_at, reviewed_by_id, \
         reviewed_at FROM evidence WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_evidence_detail(
    pool: &PgPool,
    id: &str,
) -> Result<Option<EvidenceResponse>, sqlx::Error> {
    let sql = format!("{DETAIL_SELECT} WHERE e.id = $1");
    let row = sqlx::query_as::<_, EvidenceDetailRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(EvidenceResponse::from))
}

/// Returns one page of matching records, newest submissions first, together
/// with the unpaginated match count.
pub async fn list_evidence(
    pool: &PgPool,
    filters: &EvidenceFilters,
    limit: i64,
    offset: i64,
) -> Result<(Vec<EvidenceResponse>, i64), sqlx::Error> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(DETAIL_SELECT);
    let mut has_clause = false;
    apply_evidence_filters(&mut builder, &mut has_clause, filters);
    builder.push(" ORDER BY e.submitted_at DESC, e.id DESC");
    builder
        .push(" LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    let rows = builder
        .build_query_as::<EvidenceDetailRow>()
        .fetch_all(pool)
        .await?;

    let mut count_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM evidence e");
    let mut count_has_clause = false;
    apply_evidence_filters(&mut count_builder, &mut count_has_clause, filters);
    let total = count_builder
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await?;

    Ok((rows.into_iter().map(EvidenceResponse::from).collect(), total))
}

/// Inserts the record and its `EVIDENCE_UPLOADED` trail entry atomically.
pub async fn insert_evidence_with_log(
    pool: &PgPool,
    evidence: &Evidence,
    log: &ActivityLog,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO evidence (id, title, description, domain_id, standard_id, indicator_id, \
         evidence_type, file_path, url, status, notes, submitted_by_id, submitted_at, \
         reviewed_by_id, reviewed_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
    )
    .bind(&evidence.id)
    .bind(&evidence.title)
    .bind(&evidence.description)
    .bind(&evidence.domain_id)
    .bind(&evidence.standard_id)
    .bind(&evidence.indicator_id)
    .bind(&evidence.evidence_type)
    .bind(&evidence.file_path)
    .bind(&evidence.url)
    .bind(&evidence.status)
    .bind(&evidence.notes)
    .bind(&evidence.submitted_by_id)
    .bind(evidence.submitted_at)
    .bind(&evidence.reviewed_by_id)
    .bind(evidence.reviewed_at)
    .execute(tx.as_mut())
    .await?;
    insert_activity_log(&mut tx, log).await?;
    tx.commit().await
}

/// Applies a review decision and its `EVIDENCE_REVIEWED` trail entry
/// atomically. Returns `false` when the record no longer exists, in which
/// case nothing is written.
#[allow(clippy::too_many_arguments)]
pub async fn apply_review_with_log(
    pool: &PgPool,
    id: &str,
    status: EvidenceStatus,
    notes: Option<&str>,
    reviewer_id: &str,
    reviewed_at: DateTime<Utc>,
    log: &ActivityLog,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE evidence SET status = $1, notes = $2, reviewed_by_id = $3, reviewed_at = $4 \
         WHERE id = $5",
    )
    .bind(status)
    .bind(notes)
    .bind(reviewer_id)
    .bind(reviewed_at)
    .bind(id)
    .execute(tx.as_mut())
    .await?;
    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }
    insert_activity_log(&mut tx, log).await?;
    tx.commit().await?;
    Ok(true)
}

/// Deletes the record and writes its `EVIDENCE_DELETED` trail entry
/// atomically. Returns `false` when the record no longer exists.
pub async fn delete_evidence_with_log(
    pool: &PgPool,
    id: &str,
    log: &ActivityLog,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM evidence WHERE id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;
    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }
    insert_activity_log(&mut tx, log).await?;
    tx.commit().await?;
    Ok(true)
}

fn apply_evidence_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    has_clause: &mut bool,
    filters: &EvidenceFilters,
) {
    if let Some(status) = filters.status {
        push_clause(builder, has_clause);
        builder.push("e.status = ").push_bind(status.as_str());
    }
    if let Some(domain_id) = filters.domain_id.as_ref() {
        push_clause(builder, has_clause);
        builder.push("e.domain_id = ").push_bind(domain_id.clone());
    }
    if let Some(standard_id) = filters.standard_id.as_ref() {
        push_clause(builder, has_clause);
        builder
            .push("e.standard_id = ")
            .push_bind(standard_id.clone());
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_clause: &mut bool) {
    if *has_clause {
        builder.push(" AND ");
    } else {
        builder.push(" WHERE ");
        *has_clause = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evidence::EvidenceType;

    #[test]
    fn evidence_filters_default_all_none() {
        let filters = EvidenceFilters::default();
        assert!(filters.status.is_none());
        assert!(filters.domain_id.is_none());
        assert!(filters.standard_id.is_none());
    }

    fn sample_row() -> EvidenceDetailRow {
        EvidenceDetailRow {
            id: "e1".to_string(),
            title: "Reading scores 2025".to_string(),
            description: Some("Benchmark results".to_string()),
            domain_id: "d1".to_string(),
            standard_id: "s1".to_string(),
            indicator_id: None,
            evidence_type: EvidenceType::Link,
            file_path: None,
            url: Some("https://example.com/report".to_string()),
            status: EvidenceStatus::UnderReview,
            notes: None,
            submitted_by_id: "u1".to_string(),
            submitted_at: Utc::now(),
            reviewed_by_id: None,
            reviewed_at: None,
            domain_name_en: "Academic Achievement".to_string(),
            domain_name_ar: "الإنجاز الدراسي".to_string(),
            standard_code: "1.1".to_string(),
            standard_name_en: "Assessment Results".to_string(),
            standard_name_ar: "نتائج التقويم".to_string(),
            indicator_code: None,
            indicator_description_en: None,
            indicator_description_ar: None,
            submitted_by_name: "Teacher".to_string(),
            submitted_by_email: "teacher@school.test".to_string(),
        }
    }

    #[test]
    fn detail_row_maps_missing_indicator_to_none() {
        let response: EvidenceResponse = sample_row().into();
        assert!(response.indicator.is_none());
        assert_eq!(response.domain.id, "d1");
        assert_eq!(response.submitted_by.name, "Teacher");
    }

    #[test]
    fn detail_row_maps_present_indicator() {
        let mut row = sample_row();
        row.indicator_id = Some("i1".to_string());
        row.indicator_code = Some("1.1.2".to_string());
        row.indicator_description_en = Some("Learning outcomes improve".to_string());
        let response: EvidenceResponse = row.into();
        let indicator = response.indicator.expect("indicator");
        assert_eq!(indicator.id, "i1");
        assert_eq!(indicator.code, "1.1.2");
    }
}
