//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::DomainError;
use crate::models::{Author, Book};

/// Filter criteria for book queries
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookFilter {
    pub author_id: Option<i32>,
}

/// Input for creating or replacing an author.
///
/// Carries no key: `AuthorId` is always assigned by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorInput {
    pub name: String,
}

/// Input for creating or replacing a book.
///
/// Carries no key: `BookId` is always assigned by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    pub author_id: i32,
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors, ordered by key
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, input: AuthorInput) -> Result<Author, DomainError>;

    /// Replace the mutable columns of an existing author
    async fn update(&self, id: i32, input: AuthorInput) -> Result<Author, DomainError>;

    /// Delete an author by ID. Dependent books go with it.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Books owned by the author
    async fn find_books(&self, id: i32) -> Result<Vec<Book>, DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books matching the filter criteria
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, input: BookInput) -> Result<Book, DomainError>;

    /// Replace the mutable columns of an existing book
    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
