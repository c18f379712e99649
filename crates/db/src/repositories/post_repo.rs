//! Repository for the `posts` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list for `posts` queries.
const COLUMNS: &str = "\
    id, title, slug, excerpt, body, cover_image_url, \
    is_active, published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// List posts, newest published first, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Post>, sqlx::Error> {
        let query = if include_inactive {
            format!(
                "SELECT {COLUMNS} FROM posts \
                 ORDER BY published_at DESC NULLS LAST, created_at DESC"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM posts \
                 WHERE is_active = true \
                 ORDER BY published_at DESC NULLS LAST, created_at DESC"
            )
        };
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE slug = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new post. `slug` must already be resolved by the caller
    /// (explicit or generated); uniqueness is enforced by `uq_posts_slug`.
    pub async fn create(pool: &PgPool, input: &CreatePost, slug: &str) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts \
                 (title, slug, excerpt, body, cover_image_url, is_active, published_at) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true), $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.body)
            .bind(&input.cover_image_url)
            .bind(input.is_active)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET \
                 title = COALESCE($2, title), \
                 slug = COALESCE($3, slug), \
                 excerpt = COALESCE($4, excerpt), \
                 body = COALESCE($5, body), \
                 cover_image_url = COALESCE($6, cover_image_url), \
                 published_at = COALESCE($7, published_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.body)
            .bind(&input.cover_image_url)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
