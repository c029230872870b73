use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{BlogPostRequest, PaginationParams},
    responses::{Paginated, Pagination, PostDetail, PostNavigation, PostSummary},
};
use crate::api::extractors::auth::AdminAuth;
use crate::domain::models::blog::BlogPost;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_published(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = params.resolve();

    let posts = state.blog_repo.list_published(limit, offset).await?;
    let total = state.blog_repo.count_published().await?;

    Ok(Json(Paginated {
        items: posts.into_iter().map(PostSummary::from).collect::<Vec<_>>(),
        pagination: Pagination::new(page, limit, total),
    }))
}

pub async fn get_published(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .blog_repo
        .find_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let previous = state.blog_repo.find_previous(post.published_at, post.created_at).await?;
    let next = state.blog_repo.find_next(post.published_at, post.created_at).await?;

    Ok(Json(PostDetail::new(post, PostNavigation { previous, next })))
}

pub async fn list_all(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = params.resolve();

    let posts = state.blog_repo.list_all(limit, offset).await?;
    let total = state.blog_repo.count_all().await?;

    Ok(Json(Paginated {
        items: posts.into_iter().map(PostSummary::from).collect::<Vec<_>>(),
        pagination: Pagination::new(page, limit, total),
    }))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    AdminAuth(_user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .blog_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    Ok(Json(PostDetail::new(post, PostNavigation { previous: None, next: None })))
}

fn apply_request(post: &mut BlogPost, payload: BlogPostRequest, content_json: String) {
    let was_published = post.is_published;

    post.slug = payload.slug;
    post.title = payload.title;
    post.excerpt = payload.excerpt;
    post.content_json = content_json;
    post.featured_image_url = payload.featured_image_url;
    if let Some(reading_time) = payload.reading_time {
        post.reading_time = reading_time;
    }
    if let Some(tags) = payload.tags {
        post.tags_json = serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string());
    }
    post.is_published = payload.is_published.unwrap_or(was_published);
    post.seo_title = payload.seo_title;
    post.seo_description = payload.seo_description;

    // First publish stamps published_at unless the caller supplied one.
    if let Some(published_at) = payload.published_at {
        post.published_at = Some(published_at);
    } else if post.is_published && post.published_at.is_none() {
        post.published_at = Some(Utc::now());
    }
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Json(payload): Json<BlogPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let blocks = payload.validate()?;
    let content_json = serde_json::to_string(&blocks)
        .map_err(|_| AppError::Validation("Invalid content".into()))?;

    let mut post = BlogPost::new(
        payload.slug.clone(),
        payload.title.clone(),
        payload.excerpt.clone(),
        content_json.clone(),
    );
    apply_request(&mut post, payload, content_json);

    let created = state.blog_repo.create(&post).await?;
    info!("Admin {} created post '{}'", user.email, created.slug);

    Ok((StatusCode::CREATED, Json(PostDetail::new(created, PostNavigation { previous: None, next: None }))))
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
    Json(payload): Json<BlogPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let blocks = payload.validate()?;
    let content_json = serde_json::to_string(&blocks)
        .map_err(|_| AppError::Validation("Invalid content".into()))?;

    let mut post = state
        .blog_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    apply_request(&mut post, payload, content_json);
    post.updated_at = Utc::now();

    let updated = state.blog_repo.update(&post).await?;
    info!("Admin {} updated post '{}'", user.email, updated.slug);

    Ok(Json(PostDetail::new(updated, PostNavigation { previous: None, next: None })))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AdminAuth(user): AdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.blog_repo.delete(&id).await?;
    info!("Admin {} deleted post {}", user.email, id);

    Ok(StatusCode::NO_CONTENT)
}
