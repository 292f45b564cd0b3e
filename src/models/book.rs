use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Books")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "BookId")]
    pub book_id: i32,
    #[sea_orm(column_name = "BookName")]
    pub book_name: String,
    #[sea_orm(column_name = "ReleaseDate")]
    pub release_date: Option<Date>,
    #[sea_orm(column_name = "AuthorId")]
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::AuthorId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub release_date: Option<chrono::NaiveDate>,
    pub author_id: i32,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            book_id: model.book_id,
            title: model.book_name,
            release_date: model.release_date,
            author_id: model.author_id,
        }
    }
}
