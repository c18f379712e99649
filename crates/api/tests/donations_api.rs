//! HTTP-level integration tests for donations: recording, summary figures,
//! and CSV export.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_string, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use parish_db::models::donation::CreateDonation;
use parish_db::repositories::DonationRepo;

fn new_donation(amount_cents: i64, status: &str) -> CreateDonation {
    CreateDonation {
        donor_name: None,
        donor_email: None,
        amount_cents,
        status: Some(status.to_string()),
        reference: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_donation(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/donations",
        json!({ "donor_name": "Maria", "amount_cents": 5000, "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["amount_cents"], 5000);
    assert_eq!(body["data"]["status"], "completed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_rejected_before_persistence(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/donations",
        json!({ "amount_cents": 100, "status": "refunded" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nothing was written.
    assert!(DonationRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_amount_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/donations",
        json!({ "amount_cents": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_counts_only_completed(pool: PgPool) {
    DonationRepo::create(&pool, &new_donation(100, "completed"))
        .await
        .unwrap();
    DonationRepo::create(&pool, &new_donation(50, "pending"))
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/donations/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["total_raised_cents"], 100);
    assert_eq!(body["data"]["completed_count"], 1);
    assert_eq!(body["data"]["attempt_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_csv_export(pool: PgPool) {
    DonationRepo::create(
        &pool,
        &CreateDonation {
            donor_name: Some("Silva, Maria".to_string()),
            donor_email: Some("maria@example.com".to_string()),
            amount_cents: 2500,
            status: Some("completed".to_string()),
            reference: Some("pix-123".to_string()),
        },
    )
    .await
    .unwrap();

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/donations/export").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv"
    );
    assert!(response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("donations.csv"));

    let csv = body_string(response).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,created_at,donor_name,donor_email,amount_cents,status,reference"
    );
    let row = lines.next().unwrap();
    // A donor name containing the delimiter is quoted.
    assert!(row.contains("\"Silva, Maria\""), "{row}");
    assert!(row.contains("2500,completed,pix-123"), "{row}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_reference_conflicts(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let first = post_json(
        app,
        "/api/v1/donations",
        json!({ "amount_cents": 100, "reference": "pix-dup" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let second = post_json(
        app,
        "/api/v1/donations",
        json!({ "amount_cents": 200, "reference": "pix-dup" }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = body_json(second).await;
    assert_eq!(body["code"], "CONFLICT");
}
