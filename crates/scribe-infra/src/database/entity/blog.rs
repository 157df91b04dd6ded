//! Blog entity for SeaORM.

use std::collections::BTreeSet;

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use scribe_core::domain::{Blog, BlogStatus, Category, Tag, UnknownVariant};
use scribe_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    /// JSON array of tag names.
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Blog. Fails if a stored
/// enumeration value is no longer known.
impl TryFrom<Model> for Blog {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let decode = |e: UnknownVariant| {
            RepoError::Decode(format!("blog {}: {}", model.id, e))
        };
        let category: Category = model.category.parse().map_err(decode)?;
        let status: BlogStatus = model.status.parse().map_err(decode)?;
        let tags: BTreeSet<Tag> = serde_json::from_value(model.tags)
            .map_err(|e| RepoError::Decode(format!("blog {}: tags: {}", model.id, e)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category,
            tags,
            status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from the domain Blog to SeaORM ActiveModel.
impl From<Blog> for ActiveModel {
    fn from(blog: Blog) -> Self {
        let tags = blog
            .tags
            .iter()
            .map(|t| Json::String(t.as_str().to_string()))
            .collect();

        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            content: Set(blog.content),
            category: Set(blog.category.as_str().to_string()),
            tags: Set(Json::Array(tags)),
            status: Set(blog.status.as_str().to_string()),
            created_at: Set(blog.created_at.into()),
            updated_at: Set(blog.updated_at.into()),
        }
    }
}
