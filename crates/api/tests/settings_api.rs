//! HTTP-level integration tests for settings and the computed theme.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_read_fills_defaults(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/settings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // Untouched store still yields the full typed map.
    assert_eq!(body["data"]["site_name"], "Paróquia");
    assert_eq!(body["data"]["maintenance_mode"], false);
    assert_eq!(body["data"]["donation_goal_cents"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_round_trip_typed_values(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/settings",
        json!({
            "site_name": "Catedral de Santana",
            "maintenance_mode": true,
            "donation_goal_cents": 250000,
            "primary_color": "#123456"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["site_name"], "Catedral de Santana");
    assert_eq!(body["data"]["maintenance_mode"], true);
    assert_eq!(body["data"]["donation_goal_cents"], 250000);

    // Booleans and integers are persisted in stored (string) form.
    let raw: (String,) =
        sqlx::query_as("SELECT value FROM settings WHERE key = 'maintenance_mode'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(raw.0, "true");

    // A fresh read decodes them back to typed JSON.
    let app = build_test_app(pool);
    let body = body_json(get(app, "/api/v1/settings").await).await;
    assert_eq!(body["data"]["maintenance_mode"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_setting_key_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = put_json(app, "/api/v1/settings", json!({ "mystery_key": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_color_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/settings",
        json!({ "primary_color": "dark red" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_theme_reflects_saved_colors(pool: PgPool) {
    let app = build_test_app(pool.clone());
    put_json(
        app,
        "/api/v1/settings",
        json!({ "primary_color": "#123456" }),
    )
    .await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/settings/theme").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["--color-primary"], "#123456");
    // Unset colors fall back to their defaults.
    assert!(body["data"]["--color-text"].as_str().unwrap().starts_with('#'));
}
