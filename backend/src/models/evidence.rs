//! Models for evidence records: the submission row itself, its type and
//! review-status enums, and the request/response payloads used by the
//! evidence endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::taxonomy::{DomainSummary, IndicatorSummary, StandardSummary};

/// Default page size for evidence listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Upper bound for a client-requested page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Database representation of one submitted piece of evidence.
pub struct Evidence {
    /// Unique identifier for the record.
    pub id: String,
    /// Short human-readable title, at least three characters.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Domain the evidence is filed under.
    pub domain_id: String,
    /// Standard the evidence is filed under.
    pub standard_id: String,
    /// Optional leaf indicator the evidence addresses.
    pub indicator_id: Option<String>,
    /// Whether the payload is a stored file or an external link.
    #[serde(rename = "type")]
    pub evidence_type: EvidenceType,
    /// Object-store key, set exactly when `evidence_type` is `FILE`.
    pub file_path: Option<String>,
    /// External URL, set exactly when `evidence_type` is `LINK`.
    pub url: Option<String>,
    /// Current position in the review workflow.
    pub status: EvidenceStatus,
    /// Reviewer notes, replaced wholesale on every review.
    pub notes: Option<String>,
    /// Account that submitted the record.
    pub submitted_by_id: String,
    /// Submission timestamp, drives the default listing order.
    pub submitted_at: DateTime<Utc>,
    /// Account that last reviewed the record, if any.
    pub reviewed_by_id: Option<String>,
    /// Timestamp of the last review, if any.
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
/// Payload kind of an evidence record.
pub enum EvidenceType {
    /// Binary object stored under the evidence prefix.
    File,
    /// External URL stored verbatim.
    Link,
}

impl EvidenceType {
    /// Returns the canonical database representation of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceType::File => "FILE",
            EvidenceType::Link => "LINK",
        }
    }

    /// Parses the canonical representation, `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FILE" => Some(EvidenceType::File),
            "LINK" => Some(EvidenceType::Link),
            _ => None,
        }
    }
}

impl Serialize for EvidenceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EvidenceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EvidenceType::parse(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["FILE", "LINK"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
/// Review state of an evidence record. New submissions always start in
/// `UNDER_REVIEW`; reviewers may move a record between any two states.
pub enum EvidenceStatus {
    #[default]
    UnderReview,
    Approved,
    Rejected,
}

impl EvidenceStatus {
    /// Returns the canonical database representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStatus::UnderReview => "UNDER_REVIEW",
            EvidenceStatus::Approved => "APPROVED",
            EvidenceStatus::Rejected => "REJECTED",
        }
    }

    /// Parses the canonical representation, `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "UNDER_REVIEW" => Some(EvidenceStatus::UnderReview),
            "APPROVED" => Some(EvidenceStatus::Approved),
            "REJECTED" => Some(EvidenceStatus::Rejected),
            _ => None,
        }
    }
}

impl Serialize for EvidenceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EvidenceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EvidenceStatus::parse(&s).ok_or_else(|| {
            serde::de::Error::unknown_variant(&s, &["UNDER_REVIEW", "APPROVED", "REJECTED"])
        })
    }
}

impl Evidence {
    /// Constructs a new record in the `UNDER_REVIEW` state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: Option<String>,
        domain_id: String,
        standard_id: String,
        indicator_id: Option<String>,
        evidence_type: EvidenceType,
        file_path: Option<String>,
        url: Option<String>,
        submitted_by_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            domain_id,
            standard_id,
            indicator_id,
            evidence_type,
            file_path,
            url,
            status: EvidenceStatus::UnderReview,
            notes: None,
            submitted_by_id,
            submitted_at: Utc::now(),
            reviewed_by_id: None,
            reviewed_at: None,
        }
    }
}

/// Binary payload for a `FILE` submission. The two-phase flow references an
/// object the client already uploaded; the legacy flow carries the bytes
/// inline through the API.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Object key returned by `POST /api/evidence/upload-url`.
    StoredKey(String),
    /// Raw bytes received in the multipart body.
    Inline {
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Validate)]
/// Parsed and not-yet-validated evidence submission.
pub struct CreateEvidenceInput {
    #[validate(custom(function = "crate::validation::rules::validate_title"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Domain is required"))]
    pub domain_id: String,
    #[validate(length(min = 1, message = "Standard is required"))]
    pub standard_id: String,
    pub indicator_id: Option<String>,
    pub evidence_type: EvidenceType,
    /// Payload when `evidence_type` is `FILE`.
    pub file: Option<FileSource>,
    /// Payload when `evidence_type` is `LINK`.
    #[validate(custom(function = "crate::validation::rules::validate_url"))]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Submitter fields embedded in evidence listings.
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Evidence record with its taxonomy and submitter context, as returned by
/// every evidence endpoint.
pub struct EvidenceResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub domain_id: String,
    pub standard_id: String,
    pub indicator_id: Option<String>,
    #[serde(rename = "type")]
    pub evidence_type: EvidenceType,
    pub file_path: Option<String>,
    pub url: Option<String>,
    pub status: EvidenceStatus,
    pub notes: Option<String>,
    pub submitted_by_id: String,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by_id: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub domain: DomainSummary,
    pub standard: StandardSummary,
    pub indicator: Option<IndicatorSummary>,
    pub submitted_by: UserSummary,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Query parameters accepted by `GET /api/evidence`.
pub struct EvidenceListQuery {
    /// Optional status filter; unrecognized values are ignored.
    pub status: Option<String>,
    pub domain_id: Option<String>,
    pub standard_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl EvidenceListQuery {
    /// Requested page, never below 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size, clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    /// Status filter as a typed value. Unknown strings fall back to no
    /// filter rather than an error.
    pub fn status_filter(&self) -> Option<EvidenceStatus> {
        self.status.as_deref().and_then(EvidenceStatus::parse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Pagination envelope for evidence listings.
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationInfo {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let limit = limit.max(1);
        let total_pages = (total + i64::from(limit) - 1) / i64::from(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvidenceListResponse {
    pub evidence: Vec<EvidenceResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Deserialize, ToSchema)]
/// Body of `PATCH /api/evidence/{id}/review`. `status` stays a plain string
/// so unknown values can be answered with a regular 400 instead of a body
/// rejection.
pub struct ReviewPayload {
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Message-plus-record envelope returned by mutating evidence endpoints.
pub struct EvidenceMessageResponse {
    pub message: String,
    pub evidence: EvidenceResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEvidenceResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/evidence/upload-url`.
pub struct UploadUrlRequest {
    #[validate(length(min = 1, message = "Filename and content type are required"))]
    pub filename: String,
    #[validate(length(min = 1, message = "Filename and content type are required"))]
    pub content_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Presigned PUT target for the two-phase upload flow.
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Resolved download target for one evidence record.
pub struct DownloadUrlResponse {
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::taxonomy::{DomainSummary, StandardSummary};

    fn sample_response() -> EvidenceResponse {
        EvidenceResponse {
            id: "e1".to_string(),
            title: "Reading scores 2025".to_string(),
            description: None,
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
            domain: DomainSummary {
                id: "d1".to_string(),
                name_en: "Academic Achievement".to_string(),
                name_ar: "الإنجاز الدراسي".to_string(),
            },
            standard: StandardSummary {
                id: "s1".to_string(),
                code: "1.1".to_string(),
                name_en: "Assessment Results".to_string(),
                name_ar: "نتائج التقويم".to_string(),
            },
            indicator: None,
            submitted_by: UserSummary {
                id: "u1".to_string(),
                name: "Teacher".to_string(),
                email: "teacher@school.test".to_string(),
            },
        }
    }

    #[test]
    fn evidence_enums_round_trip_canonical_values() {
        assert_eq!(EvidenceType::parse("FILE"), Some(EvidenceType::File));
        assert_eq!(EvidenceType::parse("LINK"), Some(EvidenceType::Link));
        assert_eq!(EvidenceType::parse("file"), None);

        assert_eq!(
            EvidenceStatus::parse("UNDER_REVIEW"),
            Some(EvidenceStatus::UnderReview)
        );
        assert_eq!(
            EvidenceStatus::parse("APPROVED"),
            Some(EvidenceStatus::Approved)
        );
        assert_eq!(
            EvidenceStatus::parse("REJECTED"),
            Some(EvidenceStatus::Rejected)
        );
        assert_eq!(EvidenceStatus::parse("PENDING"), None);

        let status: EvidenceStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(status, EvidenceStatus::Approved);
        assert!(serde_json::from_str::<EvidenceStatus>("\"PENDING\"").is_err());
    }

    #[test]
    fn evidence_response_uses_the_wire_field_names() {
        let json = serde_json::to_value(sample_response()).unwrap();
        assert_eq!(json["type"], "LINK");
        assert_eq!(json["status"], "UNDER_REVIEW");
        assert_eq!(json["domainId"], "d1");
        assert!(json["indicator"].is_null());
        assert_eq!(json["submittedBy"]["email"], "teacher@school.test");
        assert!(json.get("evidence_type").is_none());
    }

    #[test]
    fn list_query_defaults_and_clamps() {
        let query = EvidenceListQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), DEFAULT_PAGE_LIMIT);

        let query = EvidenceListQuery {
            page: Some(0),
            limit: Some(1000),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), MAX_PAGE_LIMIT);

        let query = EvidenceListQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(query.limit(), 1);
    }

    #[test]
    fn unknown_status_filters_are_ignored() {
        let query = EvidenceListQuery {
            status: Some("NOT_A_STATUS".to_string()),
            ..Default::default()
        };
        assert_eq!(query.status_filter(), None);

        let query = EvidenceListQuery {
            status: Some("REJECTED".to_string()),
            ..Default::default()
        };
        assert_eq!(query.status_filter(), Some(EvidenceStatus::Rejected));
    }

    #[test]
    fn pagination_rounds_total_pages_up() {
        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationInfo::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationInfo::new(1, 10, 11).total_pages, 2);
        assert_eq!(PaginationInfo::new(3, 25, 51).total_pages, 3);
    }

    #[test]
    fn new_evidence_starts_under_review() {
        let evidence = Evidence::new(
            "Reading scores 2025".to_string(),
            None,
            "d1".to_string(),
            "s1".to_string(),
            None,
            EvidenceType::Link,
            None,
            Some("https://example.com/report".to_string()),
            "u1".to_string(),
        );
        assert_eq!(evidence.status, EvidenceStatus::UnderReview);
        assert!(evidence.reviewed_by_id.is_none());
        assert!(evidence.reviewed_at.is_none());
        assert!(evidence.notes.is_none());
    }
}
