#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        reports::RecentQuery,
        taxonomy::{DomainsQuery, IndicatorsQuery, StandardsQuery},
    },
    models::{
        evidence::{
            DeleteEvidenceResponse, DownloadUrlResponse, EvidenceListQuery, EvidenceListResponse,
            EvidenceMessageResponse, EvidenceResponse, EvidenceStatus, EvidenceType,
            PaginationInfo, ReviewPayload, UploadUrlRequest, UploadUrlResponse, UserSummary,
        },
        reports::{DomainCount, RecentEvidenceItem, RecentEvidenceResponse, StatsResponse},
        taxonomy::{
            AxisSummary, AxisTree, AxisTreeResponse, DomainSummary, DomainTree, DomainWithAxis,
            DomainsResponse, Indicator, IndicatorSummary, IndicatorWithStandard,
            IndicatorsResponse, StandardSummary, StandardTree, StandardWithDomain,
            StandardsResponse,
        },
        user::{LoginRequest, LoginResponse, UserResponse},
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi, ToSchema,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        me_doc,
        axes_doc,
        domains_doc,
        standards_doc,
        indicators_doc,
        list_evidence_doc,
        upload_url_doc,
        upload_evidence_doc,
        review_evidence_doc,
        delete_evidence_doc,
        download_evidence_doc,
        stats_doc,
        recent_evidence_doc,
        export_evidence_doc
    ),
    components(
        schemas(
            // auth
            LoginRequest,
            LoginResponse,
            UserResponse,
            // taxonomy
            AxisSummary,
            AxisTree,
            AxisTreeResponse,
            DomainSummary,
            DomainTree,
            DomainWithAxis,
            DomainsResponse,
            Indicator,
            IndicatorSummary,
            IndicatorWithStandard,
            IndicatorsResponse,
            StandardSummary,
            StandardTree,
            StandardWithDomain,
            StandardsResponse,
            // evidence
            EvidenceType,
            EvidenceStatus,
            EvidenceResponse,
            EvidenceListQuery,
            EvidenceListResponse,
            PaginationInfo,
            UserSummary,
            UploadEvidenceForm,
            ReviewPayload,
            EvidenceMessageResponse,
            DeleteEvidenceResponse,
            UploadUrlRequest,
            UploadUrlResponse,
            DownloadUrlResponse,
            // reports
            StatsResponse,
            DomainCount,
            RecentEvidenceItem,
            RecentEvidenceResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login and current-user lookup"),
        (name = "Taxonomy", description = "Axes, domains, standards, and indicators"),
        (name = "Evidence", description = "Evidence submission, review, and retrieval"),
        (name = "Reports", description = "Aggregated statistics and spreadsheet export")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

/// Multipart form accepted by the legacy inline upload endpoint.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
struct UploadEvidenceForm {
    title: String,
    description: Option<String>,
    domain_id: String,
    standard_id: String,
    indicator_id: Option<String>,
    r#type: EvidenceType,
    /// Storage key from a prior `/api/evidence/upload-url` call.
    file_path: Option<String>,
    url: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    file: Option<Vec<u8>>,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 429, description = "Too many attempts from this address")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Authenticated user", body = UserResponse)),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/axes",
    responses((status = 200, description = "Full taxonomy tree", body = AxisTreeResponse)),
    tag = "Taxonomy",
    security(())
)]
fn axes_doc() {}

#[utoipa::path(
    get,
    path = "/api/domains",
    params(DomainsQuery),
    responses(
        (status = 200, body = DomainsResponse),
        (status = 400, description = "axisId missing")
    ),
    tag = "Taxonomy",
    security(())
)]
fn domains_doc() {}

#[utoipa::path(
    get,
    path = "/api/standards",
    params(StandardsQuery),
    responses(
        (status = 200, body = StandardsResponse),
        (status = 400, description = "domainId missing")
    ),
    tag = "Taxonomy",
    security(())
)]
fn standards_doc() {}

#[utoipa::path(
    get,
    path = "/api/indicators",
    params(IndicatorsQuery),
    responses(
        (status = 200, body = IndicatorsResponse),
        (status = 400, description = "standardId missing")
    ),
    tag = "Taxonomy",
    security(())
)]
fn indicators_doc() {}

#[utoipa::path(
    get,
    path = "/api/evidence",
    params(EvidenceListQuery),
    responses((status = 200, description = "Paginated evidence listing", body = EvidenceListResponse)),
    tag = "Evidence"
)]
fn list_evidence_doc() {}

#[utoipa::path(
    post,
    path = "/api/evidence/upload-url",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Presigned PUT URL and storage key", body = UploadUrlResponse),
        (status = 400, description = "Missing filename or content type"),
        (status = 429, description = "Upload budget exhausted"),
        (status = 500, description = "Object storage not configured")
    ),
    tag = "Evidence"
)]
fn upload_url_doc() {}

#[utoipa::path(
    post,
    path = "/api/evidence/upload",
    request_body(content = UploadEvidenceForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Evidence recorded", body = EvidenceMessageResponse),
        (status = 400, description = "Validation failed"),
        (status = 429, description = "Upload budget exhausted")
    ),
    tag = "Evidence"
)]
fn upload_evidence_doc() {}

#[utoipa::path(
    patch,
    path = "/api/evidence/{id}/review",
    params(("id" = String, Path, description = "Evidence id")),
    request_body = ReviewPayload,
    responses(
        (status = 200, description = "Decision recorded", body = EvidenceMessageResponse),
        (status = 400, description = "Invalid status"),
        (status = 403, description = "Requires the System Manager role"),
        (status = 404, description = "Evidence not found")
    ),
    tag = "Evidence"
)]
fn review_evidence_doc() {}

#[utoipa::path(
    delete,
    path = "/api/evidence/{id}",
    params(("id" = String, Path, description = "Evidence id")),
    responses(
        (status = 200, body = DeleteEvidenceResponse),
        (status = 403, description = "Neither submitter nor System Manager"),
        (status = 404, description = "Evidence not found")
    ),
    tag = "Evidence"
)]
fn delete_evidence_doc() {}

#[utoipa::path(
    get,
    path = "/api/evidence/{id}/download",
    params(("id" = String, Path, description = "Evidence id")),
    responses(
        (status = 200, description = "Stored URL or presigned GET", body = DownloadUrlResponse),
        (status = 404, description = "Evidence not found")
    ),
    tag = "Evidence"
)]
fn download_evidence_doc() {}

#[utoipa::path(
    get,
    path = "/api/reports/stats",
    responses((status = 200, description = "Counts by status and by domain", body = StatsResponse)),
    tag = "Reports"
)]
fn stats_doc() {}

#[utoipa::path(
    get,
    path = "/api/reports/recent",
    params(RecentQuery),
    responses((status = 200, description = "Latest submissions", body = RecentEvidenceResponse)),
    tag = "Reports"
)]
fn recent_evidence_doc() {}

#[utoipa::path(
    get,
    path = "/api/reports/export",
    responses((status = 200, description = "CSV attachment, one row per evidence record", content_type = "text/csv", body = String)),
    tag = "Reports"
)]
fn export_evidence_doc() {}
