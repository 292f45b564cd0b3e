//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, QueryOrder, Set,
};

use crate::domain::{AuthorInput, AuthorRepository, DomainError};
use crate::models::author::{ActiveModel, Column, Entity as AuthorEntity};
use crate::models::book::{Column as BookColumn, Entity as BookEntity};
use crate::models::{Author, Book};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(Column::AuthorId)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id).one(&self.db).await?;
        Ok(author.map(Author::from))
    }

    async fn create(&self, input: AuthorInput) -> Result<Author, DomainError> {
        let author = ActiveModel {
            author_id: NotSet,
            author_name: Set(input.name),
        };

        let result = author.insert(&self.db).await?;
        tracing::debug!(author_id = result.author_id, "Author created");

        Ok(Author::from(result))
    }

    async fn update(&self, id: i32, input: AuthorInput) -> Result<Author, DomainError> {
        let existing = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.author_name = Set(input.name);

        let result = active.update(&self.db).await?;
        Ok(Author::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = AuthorEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::debug!(author_id = id, "Author deleted, dependent books cascaded");
        Ok(())
    }

    async fn find_books(&self, id: i32) -> Result<Vec<Book>, DomainError> {
        let author = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let books = author
            .find_related(BookEntity)
            .order_by_asc(BookColumn::BookId)
            .all(&self.db)
            .await?;

        Ok(books.into_iter().map(Book::from).collect())
    }
}
