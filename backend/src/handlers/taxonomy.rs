use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::taxonomy::{AxisTreeResponse, DomainsResponse, IndicatorsResponse, StandardsResponse},
    repositories::taxonomy as taxonomy_repo,
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DomainsQuery {
    pub axis_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StandardsQuery {
    pub domain_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorsQuery {
    pub standard_id: Option<String>,
}

/// Whole taxonomy as nested trees, for the public landing page.
pub async fn get_axes(State(state): State<AppState>) -> Result<Json<AxisTreeResponse>, AppError> {
    let axes = taxonomy_repo::fetch_axis_tree(&state.pool).await?;
    Ok(Json(AxisTreeResponse { axes }))
}

pub async fn get_domains(
    State(state): State<AppState>,
    Query(query): Query<DomainsQuery>,
) -> Result<Json<DomainsResponse>, AppError> {
    let axis_id = query
        .axis_id
        .ok_or_else(|| AppError::BadRequest("Axis ID is required".to_string()))?;
    let domains = taxonomy_repo::list_domains(&state.pool, &axis_id).await?;
    Ok(Json(DomainsResponse { domains }))
}

pub async fn get_standards(
    State(state): State<AppState>,
    Query(query): Query<StandardsQuery>,
) -> Result<Json<StandardsResponse>, AppError> {
    let domain_id = query
        .domain_id
        .ok_or_else(|| AppError::BadRequest("Domain ID is required".to_string()))?;
    let standards = taxonomy_repo::list_standards(&state.pool, &domain_id).await?;
    Ok(Json(StandardsResponse { standards }))
}

pub async fn get_indicators(
    State(state): State<AppState>,
    Query(query): Query<IndicatorsQuery>,
) -> Result<Json<IndicatorsResponse>, AppError> {
    let standard_id = query
        .standard_id
        .ok_or_else(|| AppError::BadRequest("standardId is required".to_string()))?;
    let indicators = taxonomy_repo::list_indicators(&state.pool, &standard_id).await?;
    Ok(Json(IndicatorsResponse { indicators }))
}
