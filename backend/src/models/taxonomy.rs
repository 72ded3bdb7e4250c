//! Models for the fixed evaluation taxonomy: Axis, Domain, Standard, and
//! Indicator rows plus the nested shapes the API returns. The taxonomy is
//! seeded once and read-only at runtime.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Top-level grouping of the evaluation taxonomy.
pub struct Axis {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Leaf-level measurable criterion under a Standard.
pub struct Indicator {
    pub id: String,
    pub code: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub standard_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Parent axis fields embedded in domain listings.
pub struct AxisSummary {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Parent domain fields embedded in standard and evidence listings.
pub struct DomainSummary {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Parent standard fields embedded in indicator and evidence listings.
pub struct StandardSummary {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Indicator fields embedded in evidence listings.
pub struct IndicatorSummary {
    pub id: String,
    pub code: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Domain row with its parent axis, as returned by `GET /api/domains`.
pub struct DomainWithAxis {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub axis_id: String,
    pub axis: AxisSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Standard row with its parent domain, as returned by `GET /api/standards`.
pub struct StandardWithDomain {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_ar: String,
    pub domain_id: String,
    pub domain: DomainSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Indicator row with its parent standard, as returned by `GET /api/indicators`.
pub struct IndicatorWithStandard {
    pub id: String,
    pub code: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub standard_id: String,
    pub standard: StandardSummary,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DomainsResponse {
    pub domains: Vec<DomainWithAxis>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StandardsResponse {
    pub standards: Vec<StandardWithDomain>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndicatorsResponse {
    pub indicators: Vec<IndicatorWithStandard>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Axis with every descendant level nested, for the public landing page.
pub struct AxisTree {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub domains: Vec<DomainTree>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainTree {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub standards: Vec<StandardTree>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandardTree {
    pub id: String,
    pub code: String,
    pub name_en: String,
    pub name_ar: String,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AxisTreeResponse {
    pub axes: Vec<AxisTree>,
}
