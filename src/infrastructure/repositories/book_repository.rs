//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{BookFilter, BookInput, BookRepository, DomainError};
use crate::models::Book;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut query = BookEntity::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(Column::AuthorId.eq(author_id));
        }

        let books = query.order_by_asc(Column::BookId).all(&self.db).await?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;
        Ok(book.map(Book::from))
    }

    async fn create(&self, input: BookInput) -> Result<Book, DomainError> {
        // Referential integrity is left to the store's FK_Books_Author.
        let new_book = ActiveModel {
            book_id: NotSet,
            book_name: Set(input.title),
            release_date: Set(input.release_date),
            author_id: Set(input.author_id),
        };

        let result = new_book.insert(&self.db).await?;
        tracing::debug!(
            book_id = result.book_id,
            author_id = result.author_id,
            "Book created"
        );

        Ok(Book::from(result))
    }

    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.book_name = Set(input.title);
        active.release_date = Set(input.release_date);
        active.author_id = Set(input.author_id);

        let result = active.update(&self.db).await?;
        Ok(Book::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BookEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
