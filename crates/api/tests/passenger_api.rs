//! Integration tests for the paginated, filtered passenger listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_passenger, seed_passengers, TestPassenger};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_page_of_fifteen_rows_has_five(pool: PgPool) {
    seed_passengers(&pool, 15).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?page=2&page_size=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["passengers"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_count"], 15);
    assert_eq!(json["page"], 2);
    assert_eq!(json["page_size"], 10);
    assert_eq!(json["total_pages"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_beyond_the_last_is_empty_not_an_error(pool: PgPool) {
    seed_passengers(&pool, 15).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?page=5&page_size=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["passengers"].as_array().unwrap().is_empty());
    // Metadata stays accurate for the dataset, not the empty page.
    assert_eq!(json["total_count"], 15);
    assert_eq!(json["total_pages"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn defaults_are_page_one_and_fifty_rows(pool: PgPool) {
    seed_passengers(&pool, 3).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 50);
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["passengers"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn largest_representable_page_is_empty_not_an_error(pool: PgPool) {
    seed_passengers(&pool, 3).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/passengers?page={}&page_size=500", i64::MAX);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["passengers"].as_array().unwrap().is_empty());
    assert_eq!(json["total_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_table_lists_zero_rows_and_zero_pages(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["passengers"].as_array().unwrap().is_empty());
    assert_eq!(json["total_count"], 0);
    assert_eq!(json["total_pages"], 0);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn survived_filter_narrows_the_listing(pool: PgPool) {
    insert_passenger(
        &pool,
        &TestPassenger {
            survived: 1,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(&pool, &TestPassenger::default()).await;
    insert_passenger(&pool, &TestPassenger::default()).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?survived=1").await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 1);
    assert_eq!(json["passengers"][0]["survived"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filters_combine_with_and_semantics(pool: PgPool) {
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 1,
            sex: Some("female"),
            adult_male: false,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 1,
            sex: Some("male"),
            ..Default::default()
        },
    )
    .await;
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 3,
            sex: Some("female"),
            adult_male: false,
            ..Default::default()
        },
    )
    .await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?pclass=1&sex=female").await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 1);
    assert_eq!(json["passengers"][0]["pclass"], 1);
    assert_eq!(json["passengers"][0]["sex"], "female");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn age_range_is_inclusive_on_both_ends(pool: PgPool) {
    for age in [17.0, 18.0, 25.0, 30.0, 31.0] {
        insert_passenger(
            &pool,
            &TestPassenger {
                age: Some(age),
                ..Default::default()
            },
        )
        .await;
    }
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?min_age=18&max_age=30").await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_age_rows_never_match_an_age_filter(pool: PgPool) {
    insert_passenger(
        &pool,
        &TestPassenger {
            age: None,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(
        &pool,
        &TestPassenger {
            age: Some(40.0),
            ..Default::default()
        },
    )
    .await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?min_age=0").await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_age_range_returns_zero_rows_not_an_error(pool: PgPool) {
    seed_passengers(&pool, 5).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?min_age=18&max_age=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0);
    assert!(json["passengers"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn boolean_flags_filter_the_listing(pool: PgPool) {
    insert_passenger(
        &pool,
        &TestPassenger {
            alone: false,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(&pool, &TestPassenger::default()).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers?alone=false").await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 1);
    assert_eq!(json["passengers"][0]["alone"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_is_ordered_by_class_then_sex_then_age(pool: PgPool) {
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 3,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 1,
            ..Default::default()
        },
    )
    .await;
    insert_passenger(
        &pool,
        &TestPassenger {
            pclass: 2,
            ..Default::default()
        },
    )
    .await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/passengers").await;
    let json = body_json(response).await;

    let classes: Vec<i64> = json["passengers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pclass"].as_i64().unwrap())
        .collect();
    assert_eq!(classes, vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_pool_surfaces_as_sanitized_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/api/v1/passengers?pclass=1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_page_params_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/passengers?page=0",
        "/api/v1/passengers?page_size=0",
        "/api/v1/passengers?page_size=501",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "{uri} must be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_filter_values_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/passengers?survived=2",
        "/api/v1/passengers?pclass=4",
        "/api/v1/passengers?sex=other",
        "/api/v1/passengers?min_age=-1",
        "/api/v1/passengers?max_age=121",
        "/api/v1/passengers?embarked=X",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "{uri} must be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["error"].is_string());
    }
}
