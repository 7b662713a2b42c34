//! 班级模板实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    // JSON 数组文本，如 ["FALL","SPRING"]
    pub semesters_offered: String,
    pub grading_system: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_histories::Entity")]
    ClassHistories,
}

impl Related<super::class_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassHistories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::Class;
        use chrono::{DateTime, Utc};

        Class {
            id: self.id,
            title: self.title,
            category: self.category,
            semesters_offered: serde_json::from_str(&self.semesters_offered).unwrap_or_default(),
            grading_system: self.grading_system,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
