//! Author API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::error_response;
use crate::domain::{AuthorInput, DomainError};
use crate::infrastructure::AppState;

const NOT_FOUND: &str = "Author not found";

#[utoipa::path(
    get,
    path = "/api/authors",
    responses((status = 200, description = "All authors", body = [crate::models::Author]))
)]
pub async fn list_authors(State(state): State<AppState>) -> impl IntoResponse {
    match state.author_repo.find_all().await {
        Ok(authors) => (StatusCode::OK, Json(authors)).into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    post,
    path = "/api/authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = crate::models::Author),
        (status = 422, description = "Name longer than 50 characters")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<AuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.create(payload).await {
        Ok(author) => (StatusCode::CREATED, Json(author)).into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    params(("id" = i32, Path, description = "AuthorId")),
    responses(
        (status = 200, description = "Author", body = crate::models::Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.author_repo.find_by_id(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(author)).into_response(),
        Ok(None) => error_response(DomainError::NotFound, NOT_FOUND),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    params(("id" = i32, Path, description = "AuthorId")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author updated", body = crate::models::Author),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Name longer than 50 characters")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.update(id, payload).await {
        Ok(author) => (StatusCode::OK, Json(author)).into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    params(("id" = i32, Path, description = "AuthorId")),
    responses((status = 200, description = "Author and their books deleted"))
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.author_repo.delete(id).await {
        // Idempotent delete - a missing author is already gone
        Ok(()) | Err(DomainError::NotFound) => (
            StatusCode::OK,
            Json(json!({ "message": "Author deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}/books",
    params(("id" = i32, Path, description = "AuthorId")),
    responses(
        (status = 200, description = "Books written by the author", body = [crate::models::Book]),
        (status = 404, description = "Author not found")
    )
)]
pub async fn list_author_books(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.author_repo.find_books(id).await {
        Ok(books) => Json(json!({
            "books": books,
            "total": books.len()
        }))
        .into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}
