use crate::domain::{models::blog::{BlogPost, PostNavRef}, ports::BlogRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresBlogRepo {
    pool: PgPool,
}

impl PostgresBlogRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepo {
    async fn create(&self, post: &BlogPost) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"INSERT INTO blog_posts (id, slug, title, excerpt, content_json, featured_image_url, reading_time, tags_json, is_published, published_at, seo_title, seo_description, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
               RETURNING *"#
        )
            .bind(&post.id)
            .bind(&post.slug)
            .bind(&post.title)
            .bind(&post.excerpt)
            .bind(&post.content_json)
            .bind(&post.featured_image_url)
            .bind(post.reading_time)
            .bind(&post.tags_json)
            .bind(post.is_published)
            .bind(post.published_at)
            .bind(&post.seo_title)
            .bind(&post.seo_description)
            .bind(post.created_at)
            .bind(post.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, AppError> {
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE slug = $1 AND is_published"
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_published(&self, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"SELECT * FROM blog_posts
               WHERE is_published
               ORDER BY COALESCE(published_at, created_at) DESC, created_at DESC
               LIMIT $1 OFFSET $2"#
        )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_published(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts WHERE is_published")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"SELECT * FROM blog_posts
               ORDER BY COALESCE(published_at, created_at) DESC, created_at DESC
               LIMIT $1 OFFSET $2"#
        )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_previous(&self, published_at: Option<DateTime<Utc>>, created_at: DateTime<Utc>) -> Result<Option<PostNavRef>, AppError> {
        sqlx::query_as::<_, PostNavRef>(
            r#"SELECT slug, title FROM blog_posts
               WHERE is_published
                 AND (COALESCE(published_at, created_at) < COALESCE($1, $2)
                      OR (COALESCE(published_at, created_at) = COALESCE($1, $2) AND created_at < $2))
               ORDER BY COALESCE(published_at, created_at) DESC, created_at DESC
               LIMIT 1"#
        )
            .bind(published_at)
            .bind(created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_next(&self, published_at: Option<DateTime<Utc>>, created_at: DateTime<Utc>) -> Result<Option<PostNavRef>, AppError> {
        sqlx::query_as::<_, PostNavRef>(
            r#"SELECT slug, title FROM blog_posts
               WHERE is_published
                 AND (COALESCE(published_at, created_at) > COALESCE($1, $2)
                      OR (COALESCE(published_at, created_at) = COALESCE($1, $2) AND created_at > $2))
               ORDER BY COALESCE(published_at, created_at) ASC, created_at ASC
               LIMIT 1"#
        )
            .bind(published_at)
            .bind(created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, post: &BlogPost) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(
            r#"UPDATE blog_posts SET
               slug = $1, title = $2, excerpt = $3, content_json = $4, featured_image_url = $5,
               reading_time = $6, tags_json = $7, is_published = $8, published_at = $9,
               seo_title = $10, seo_description = $11, updated_at = $12
               WHERE id = $13
               RETURNING *"#
        )
            .bind(&post.slug)
            .bind(&post.title)
            .bind(&post.excerpt)
            .bind(&post.content_json)
            .bind(&post.featured_image_url)
            .bind(post.reading_time)
            .bind(&post.tags_json)
            .bind(post.is_published)
            .bind(post.published_at)
            .bind(&post.seo_title)
            .bind(&post.seo_description)
            .bind(post.updated_at)
            .bind(&post.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Post not found".into()));
        }
        Ok(())
    }
}
