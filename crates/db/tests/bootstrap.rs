use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify the schema is present.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    parish_db::health_check(&pool).await.unwrap();

    // Every entity table exists and is queryable.
    let tables = [
        "posts",
        "albums",
        "photos",
        "priests",
        "pastorals",
        "celebrations",
        "slides",
        "popups",
        "donations",
        "settings",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The shared updated_at trigger function must be installed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger_installed(pool: PgPool) {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM pg_proc WHERE proname = 'set_updated_at'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}
