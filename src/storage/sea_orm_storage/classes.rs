//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{GradeSystemError, Result};
use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    common::RecordStatus,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            category: Set(req.category),
            semesters_offered: Set(serde_json::to_string(&req.semesters_offered)?),
            grading_system: Set(req
                .grading_system
                .unwrap_or_else(|| "US letter".to_string())),
            status: Set(RecordStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级（不含已删除）
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出班级（不含已删除）
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            title: Set(update.title),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(category) = update.category {
            model.category = Set(Some(category));
        }

        if let Some(semesters_offered) = update.semesters_offered {
            model.semesters_offered = Set(serde_json::to_string(&semesters_offered)?);
        }

        if let Some(grading_system) = update.grading_system {
            model.grading_system = Set(grading_system);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 软删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Classes::update_many()
            .col_expr(Column::Status, Expr::value(RecordStatus::Deleted.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(class_id))
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 恢复被软删除的班级
    pub async fn restore_class_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let now = chrono::Utc::now().timestamp();

        let result = Classes::update_many()
            .col_expr(Column::Status, Expr::value(RecordStatus::Active.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(class_id))
            .filter(Column::Status.eq(RecordStatus::Deleted.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("恢复班级失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_class_by_id_impl(class_id).await
    }
}
