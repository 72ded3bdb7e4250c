//! Read-only repository functions for the evaluation taxonomy.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use crate::models::taxonomy::{
    Axis, AxisSummary, AxisTree, DomainSummary, DomainTree, DomainWithAxis, Indicator,
    IndicatorWithStandard, StandardSummary, StandardTree, StandardWithDomain,
};

#[derive(Debug, FromRow)]
struct DomainWithAxisRow {
    id: String,
    code: String,
    name_en: String,
    name_ar: String,
    description_en: Option<String>,
    description_ar: Option<String>,
    axis_id: String,
    axis_name_en: String,
    axis_name_ar: String,
}

#[derive(Debug, FromRow)]
struct StandardWithDomainRow {
    id: String,
    code: String,
    name_en: String,
    name_ar: String,
    domain_id: String,
    domain_name_en: String,
    domain_name_ar: String,
}

#[derive(Debug, FromRow)]
struct IndicatorWithStandardRow {
    id: String,
    code: String,
    description_en: Option<String>,
    description_ar: Option<String>,
    standard_id: String,
    standard_code: String,
    standard_name_en: String,
    standard_name_ar: String,
}

pub async fn list_domains(pool: &PgPool, axis_id: &str) -> Result<Vec<DomainWithAxis>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DomainWithAxisRow>(
        "SELECT d.id, d.code, d.name_en, d.name_ar, d.description_en, d.description_ar, \
         d.axis_id, a.name_en AS axis_name_en, a.name_ar AS axis_name_ar \
         FROM domains d \
         JOIN axes a ON a.id = d.axis_id \
         WHERE d.axis_id = $1 \
         ORDER BY d.name_en ASC",
    )
    .bind(axis_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| DomainWithAxis {
            id: row.id,
            code: row.code,
            name_en: row.name_en,
            name_ar: row.name_ar,
            description_en: row.description_en,
            description_ar: row.description_ar,
            axis: AxisSummary {
                id: row.axis_id.clone(),
                name_en: row.axis_name_en,
                name_ar: row.axis_name_ar,
            },
            axis_id: row.axis_id,
        })
        .collect())
}

pub async fn list_standards(
    pool: &PgPool,
    domain_id: &str,
) -> Result<Vec<StandardWithDomain>, sqlx::Error> {
    let rows = sqlx::query_as::<_, StandardWithDomainRow>(
        "SELECT s.id, s.code, s.name_en, s.name_ar, s.domain_id, \
         d.name_en AS domain_name_en, d.name_ar AS domain_name_ar \
         FROM standards s \
         JOIN domains d ON d.id = s.domain_id \
         WHERE s.domain_id = $1 \
         ORDER BY s.code ASC",
    )
    .bind(domain_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| StandardWithDomain {
            id: row.id,
            code: row.code,
            name_en: row.name_en,
            name_ar: row.name_ar,
            domain: DomainSummary {
                id: row.domain_id.clone(),
                name_en: row.domain_name_en,
                name_ar: row.domain_name_ar,
            },
            domain_id: row.domain_id,
        })
        .collect())
}

pub async fn list_indicators(
    pool: &PgPool,
    standard_id: &str,
) -> Result<Vec<IndicatorWithStandard>, sqlx::Error> {
    let rows = sqlx::query_as::<_, IndicatorWithStandardRow>(
        "SELECT i.id, i.code, i.description_en, i.description_ar, i.standard_id, \
         s.code AS standard_code, s.name_en AS standard_name_en, s.name_ar AS standard_name_ar \
         FROM indicators i \
         JOIN standards s ON s.id = i.standard_id \
         WHERE i.standard_id = $1 \
         ORDER BY i.code ASC",
    )
    .bind(standard_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| IndicatorWithStandard {
            id: row.id,
            code: row.code,
            description_en: row.description_en,
            description_ar: row.description_ar,
            standard: StandardSummary {
                id: row.standard_id.clone(),
                code: row.standard_code,
                name_en: row.standard_name_en,
                name_ar: row.standard_name_ar,
            },
            standard_id: row.standard_id,
        })
        .collect())
}

/// Loads the whole taxonomy as nested trees, one query per level.
pub async fn fetch_axis_tree(pool: &PgPool) -> Result<Vec<AxisTree>, sqlx::Error> {
    let axes = sqlx::query_as::<_, Axis>(
        "SELECT id, name_en, name_ar, description_en, description_ar \
         FROM axes ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    let domains = sqlx::query_as::<_, DomainTreeRow>(
        "SELECT id, code, name_en, name_ar, description_en, description_ar, axis_id \
         FROM domains ORDER BY code ASC",
    )
    .fetch_all(pool)
    .await?;
    let standards = sqlx::query_as::<_, StandardTreeRow>(
        "SELECT id, code, name_en, name_ar, domain_id FROM standards ORDER BY code ASC",
    )
    .fetch_all(pool)
    .await?;
    let indicators = sqlx::query_as::<_, Indicator>(
        "SELECT id, code, description_en, description_ar, standard_id \
         FROM indicators ORDER BY code ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut indicators_by_standard: HashMap<String, Vec<Indicator>> = HashMap::new();
    for indicator in indicators {
        indicators_by_standard
            .entry(indicator.standard_id.clone())
            .or_default()
            .push(indicator);
    }

    let mut standards_by_domain: HashMap<String, Vec<StandardTree>> = HashMap::new();
    for standard in standards {
        let children = indicators_by_standard
            .remove(&standard.id)
            .unwrap_or_default();
        standards_by_domain
            .entry(standard.domain_id.clone())
            .or_default()
            .push(StandardTree {
                id: standard.id,
                code: standard.code,
                name_en: standard.name_en,
                name_ar: standard.name_ar,
                indicators: children,
            });
    }

    let mut domains_by_axis: HashMap<String, Vec<DomainTree>> = HashMap::new();
    for domain in domains {
        let children = standards_by_domain.remove(&domain.id).unwrap_or_default();
        domains_by_axis
            .entry(domain.axis_id.clone())
            .or_default()
            .push(DomainTree {
                id: domain.id,
                code: domain.code,
                name_en: domain.name_en,
                name_ar: domain.name_ar,
                description_en: domain.description_en,
                description_ar: domain.description_ar,
                standards: children,
            });
    }

    Ok(axes
        .into_iter()
        .map(|axis| {
            let children = domains_by_axis.remove(&axis.id).unwrap_or_default();
            AxisTree {
                id: axis.id,
                name_en: axis.name_en,
                name_ar: axis.name_ar,
                description_en: axis.description_en,
                description_ar: axis.description_ar,
                domains: children,
            }
        })
        .collect())
}

#[derive(Debug, FromRow)]
struct DomainTreeRow {
    id: String,
    code: String,
    name_en: String,
    name_ar: String,
    description_en: Option<String>,
    description_ar: Option<String>,
    axis_id: String,
}

#[derive(Debug, FromRow)]
struct StandardTreeRow {
    id: String,
    code: String,
    name_en: String,
    name_ar: String,
    domain_id: String,
}

pub async fn domain_exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM domains WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn standard_exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM standards WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn indicator_exists(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM indicators WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn count_axes(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM axes")
        .fetch_one(pool)
        .await
}
