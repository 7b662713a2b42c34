//! 成绩实体
//!
//! 仅提供表结构。category 取值为 Homework / Quiz / Mock / Final /
//! Mid-term / Exam / Other / N/A，默认 N/A。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_history_id: i64,
    pub grade: String,
    pub assignment: Option<String>,
    pub category: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::class_histories::Entity",
        from = "Column::ClassHistoryId",
        to = "super::class_histories::Column::Id"
    )]
    ClassHistory,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::class_histories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
