use axum::extract::{Query, State};
use sqlx::PgPool;

use ses_backend::{
    error::AppError,
    handlers::taxonomy::{
        get_axes, get_domains, get_indicators, get_standards, DomainsQuery, IndicatorsQuery,
        StandardsQuery,
    },
};

mod support;

use support::{seed_taxonomy, test_state};

#[sqlx::test(migrations = "./migrations")]
async fn axes_endpoint_returns_nested_tree(pool: PgPool) {
    let fixture = seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_axes(State(state)).await.expect("list axes");

    assert_eq!(response.0.axes.len(), 1);
    let axis = &response.0.axes[0];
    assert_eq!(axis.id, fixture.axis_id);
    assert_eq!(axis.name_en, "Quality of Learning Outcomes");

    assert_eq!(axis.domains.len(), 2);
    let first_domain = &axis.domains[0];
    assert_eq!(first_domain.code, "D1");
    assert_eq!(first_domain.standards.len(), 1);
    let standard = &first_domain.standards[0];
    assert_eq!(standard.code, "1.1");
    assert_eq!(standard.indicators.len(), 1);
    assert_eq!(standard.indicators[0].code, "1.1.1");

    let second_domain = &axis.domains[1];
    assert_eq!(second_domain.code, "D2");
    assert_eq!(second_domain.standards.len(), 1);
    assert!(second_domain.standards[0].indicators.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn axes_endpoint_handles_empty_taxonomy(pool: PgPool) {
    let state = test_state(pool);

    let response = get_axes(State(state)).await.expect("list axes");

    assert!(response.0.axes.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn domains_endpoint_requires_axis_id(pool: PgPool) {
    let state = test_state(pool);

    let err = get_domains(State(state), Query(DomainsQuery { axis_id: None }))
        .await
        .expect_err("missing axis id should fail");

    match err {
        AppError::BadRequest(message) => assert_eq!(message, "Axis ID is required"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn domains_endpoint_lists_domains_with_axis_summary(pool: PgPool) {
    let fixture = seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_domains(
        State(state),
        Query(DomainsQuery {
            axis_id: Some(fixture.axis_id.clone()),
        }),
    )
    .await
    .expect("list domains");

    let domains = response.0.domains;
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].code, "D1");
    assert_eq!(domains[1].code, "D2");
    assert_eq!(domains[0].axis.id, fixture.axis_id);
    assert_eq!(domains[0].axis.name_ar, "جودة نواتج التعلم");
}

#[sqlx::test(migrations = "./migrations")]
async fn domains_endpoint_returns_empty_list_for_unknown_axis(pool: PgPool) {
    seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_domains(
        State(state),
        Query(DomainsQuery {
            axis_id: Some("axis-missing".to_string()),
        }),
    )
    .await
    .expect("list domains");

    assert!(response.0.domains.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn standards_endpoint_requires_domain_id(pool: PgPool) {
    let state = test_state(pool);

    let err = get_standards(State(state), Query(StandardsQuery { domain_id: None }))
        .await
        .expect_err("missing domain id should fail");

    match err {
        AppError::BadRequest(message) => assert_eq!(message, "Domain ID is required"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn standards_endpoint_lists_standards_with_domain_summary(pool: PgPool) {
    let fixture = seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_standards(
        State(state),
        Query(StandardsQuery {
            domain_id: Some(fixture.domain_id.clone()),
        }),
    )
    .await
    .expect("list standards");

    let standards = response.0.standards;
    assert_eq!(standards.len(), 1);
    assert_eq!(standards[0].id, fixture.standard_id);
    assert_eq!(standards[0].code, "1.1");
    assert_eq!(standards[0].domain.id, fixture.domain_id);
    assert_eq!(standards[0].domain.name_en, "Academic Achievement");
}

#[sqlx::test(migrations = "./migrations")]
async fn indicators_endpoint_requires_standard_id(pool: PgPool) {
    let state = test_state(pool);

    let err = get_indicators(State(state), Query(IndicatorsQuery { standard_id: None }))
        .await
        .expect_err("missing standard id should fail");

    match err {
        AppError::BadRequest(message) => assert_eq!(message, "standardId is required"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn indicators_endpoint_lists_indicators_with_standard_summary(pool: PgPool) {
    let fixture = seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_indicators(
        State(state),
        Query(IndicatorsQuery {
            standard_id: Some(fixture.standard_id.clone()),
        }),
    )
    .await
    .expect("list indicators");

    let indicators = response.0.indicators;
    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].id, fixture.indicator_id);
    assert_eq!(indicators[0].code, "1.1.1");
    assert_eq!(indicators[0].standard.code, "1.1");
}

#[sqlx::test(migrations = "./migrations")]
async fn indicators_endpoint_returns_empty_list_for_bare_standard(pool: PgPool) {
    let fixture = seed_taxonomy(&pool).await;
    let state = test_state(pool);

    let response = get_indicators(
        State(state),
        Query(IndicatorsQuery {
            standard_id: Some(fixture.second_standard_id.clone()),
        }),
    )
    .await
    .expect("list indicators");

    assert!(response.0.indicators.is_empty());
}
