use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Author")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "AuthorId")]
    pub author_id: i32,
    #[sea_orm(column_name = "AuthorName")]
    pub author_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub author_id: i32,
    pub name: String,
}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            author_id: model.author_id,
            name: model.author_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_exposes_name_alias() {
        let author = Author::from(Model {
            author_id: 7,
            author_name: "Ursula K. Le Guin".to_string(),
        });
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["author_id"], 7);
        assert_eq!(json["name"], "Ursula K. Le Guin");
    }
}
