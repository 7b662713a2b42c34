//! 学生实体
//!
//! 仅提供表结构，招生/选课的维护路径不在本仓库范围内。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub student_id: Option<String>,
    // 任意联系方式，JSON 文本
    #[sea_orm(column_type = "Text", nullable)]
    pub contact_info: Option<String>,
    pub enrolled: Option<bool>,
    // JSON 数组文本，班级历史 ID 列表
    pub class_history: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
