//! Wire shapes for the reporting endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::evidence::EvidenceStatus;
use super::taxonomy::{DomainSummary, StandardSummary};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Evidence volume for one domain. Domains with no evidence report zero.
pub struct DomainCount {
    pub domain_id: String,
    pub name_en: String,
    pub name_ar: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_evidence: i64,
    pub approved_evidence: i64,
    pub rejected_evidence: i64,
    pub under_review_evidence: i64,
    pub evidence_by_domain: Vec<DomainCount>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Dashboard listing entry with the taxonomy names already joined in.
pub struct RecentEvidenceItem {
    pub id: String,
    pub title: String,
    pub status: EvidenceStatus,
    pub submitted_at: DateTime<Utc>,
    pub domain: DomainSummary,
    pub standard: StandardSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentEvidenceResponse {
    pub evidence: Vec<RecentEvidenceItem>,
}
