use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::error_response;
use crate::domain::{BookFilter, BookInput, DomainError};
use crate::infrastructure::AppState;

const NOT_FOUND: &str = "Book not found";

#[utoipa::path(
    get,
    path = "/api/books",
    params(("author_id" = Option<i32>, Query, description = "Only books by this author")),
    responses((status = 200, description = "Books and total count"))
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>,
) -> impl IntoResponse {
    match state.book_repo.find_all(filter).await {
        Ok(books) => Json(json!({
            "books": books,
            "total": books.len()
        }))
        .into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = crate::models::Book),
        (status = 409, description = "author_id does not reference an existing author"),
        (status = 422, description = "Title longer than 50 characters")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookInput>,
) -> impl IntoResponse {
    match state.book_repo.create(payload).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "BookId")),
    responses(
        (status = 200, description = "Book", body = crate::models::Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.find_by_id(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(book)).into_response(),
        Ok(None) => error_response(DomainError::NotFound, NOT_FOUND),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "BookId")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = crate::models::Book),
        (status = 404, description = "Book not found"),
        (status = 409, description = "author_id does not reference an existing author")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookInput>,
) -> impl IntoResponse {
    match state.book_repo.update(id, payload).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "BookId")),
    responses((status = 200, description = "Book deleted"))
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.delete(id).await {
        Ok(()) | Err(DomainError::NotFound) => (
            StatusCode::OK,
            Json(json!({ "message": "Book deleted successfully" })),
        )
            .into_response(),
        Err(e) => error_response(e, NOT_FOUND),
    }
}
