pub mod author;
pub mod books;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        .route("/authors/:id/books", get(author::list_author_books))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state)
}

/// Map a domain failure onto an HTTP status with an `{"error": ...}` body.
pub(crate) fn error_response(err: DomainError, not_found: &str) -> Response {
    let (status, message) = match err {
        DomainError::NotFound => (StatusCode::NOT_FOUND, not_found.to_string()),
        DomainError::ForeignKeyViolation(_) => (StatusCode::CONFLICT, err.to_string()),
        DomainError::ConstraintViolation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        DomainError::Database(_) => {
            tracing::error!("{}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
        }
    };

    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_errors_hide_driver_details() {
        let response = error_response(
            DomainError::Database("error occurred while decoding column \"ReleaseDate\"".into()),
            "Book not found",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Database error");
    }

    #[tokio::test]
    async fn constraint_errors_keep_their_message() {
        let response = error_response(
            DomainError::ForeignKeyViolation("FOREIGN KEY constraint failed".into()),
            "Book not found",
        );
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Foreign key violation: FOREIGN KEY constraint failed"
        );
    }

    #[tokio::test]
    async fn not_found_uses_resource_message() {
        let response = error_response(DomainError::NotFound, "Author not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Author not found");
    }
}
