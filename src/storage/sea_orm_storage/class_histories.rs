//! 班级历史存储操作

use super::SeaOrmStorage;
use crate::entity::class_histories::{ActiveModel, Column, Entity as ClassHistories};
use crate::entity::classes::Entity as Classes;
use crate::errors::{GradeSystemError, Result};
use crate::models::{
    class_histories::{
        entities::ClassHistory,
        requests::{CreateClassHistoryRequest, UpdateClassHistoryRequest},
    },
    classes::entities::Class,
    common::RecordStatus,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级历史
    pub async fn create_class_history_impl(
        &self,
        req: CreateClassHistoryRequest,
    ) -> Result<ClassHistory> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            year: Set(req.year),
            semester: Set(req.semester.unwrap_or_default().to_string()),
            students: Set(serde_json::to_string(&req.students)?),
            status: Set(RecordStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            GradeSystemError::database_operation(format!("创建班级历史失败: {e}"))
        })?;

        Ok(result.into_class_history())
    }

    /// 通过 ID 获取班级历史（不含已删除，不带班级）
    async fn get_class_history_by_id_impl(&self, history_id: i64) -> Result<Option<ClassHistory>> {
        let result = ClassHistories::find_by_id(history_id)
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                GradeSystemError::database_operation(format!("查询班级历史失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_class_history()))
    }

    /// 通过 ID 获取班级历史及其所属班级
    pub async fn get_class_history_with_class_impl(
        &self,
        history_id: i64,
    ) -> Result<Option<(ClassHistory, Option<Class>)>> {
        let result = ClassHistories::find_by_id(history_id)
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .find_also_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| {
                GradeSystemError::database_operation(format!("查询班级历史失败: {e}"))
            })?;

        Ok(result.map(|(history, class)| {
            (history.into_class_history(), class.map(|c| c.into_class()))
        }))
    }

    /// 列出班级历史，连带所属班级（不含已删除）
    pub async fn list_class_histories_with_class_impl(
        &self,
    ) -> Result<Vec<(ClassHistory, Option<Class>)>> {
        let histories = ClassHistories::find()
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .order_by_asc(Column::Id)
            .find_also_related(Classes)
            .all(&self.db)
            .await
            .map_err(|e| {
                GradeSystemError::database_operation(format!("查询班级历史列表失败: {e}"))
            })?;

        Ok(histories
            .into_iter()
            .map(|(history, class)| {
                (history.into_class_history(), class.map(|c| c.into_class()))
            })
            .collect())
    }

    /// 更新班级历史
    ///
    /// students 数组不经过此路径，由独立路径维护。
    pub async fn update_class_history_impl(
        &self,
        history_id: i64,
        update: UpdateClassHistoryRequest,
    ) -> Result<Option<ClassHistory>> {
        // 先检查记录是否存在
        let existing = self.get_class_history_by_id_impl(history_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(history_id),
            class_id: Set(update.class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(year) = update.year {
            model.year = Set(year);
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester.to_string());
        }

        model.update(&self.db).await.map_err(|e| {
            GradeSystemError::database_operation(format!("更新班级历史失败: {e}"))
        })?;

        self.get_class_history_by_id_impl(history_id).await
    }

    /// 软删除班级历史
    pub async fn delete_class_history_impl(&self, history_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = ClassHistories::update_many()
            .col_expr(Column::Status, Expr::value(RecordStatus::Deleted.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(history_id))
            .filter(Column::Status.eq(RecordStatus::Active.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                GradeSystemError::database_operation(format!("删除班级历史失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 恢复被软删除的班级历史
    pub async fn restore_class_history_impl(
        &self,
        history_id: i64,
    ) -> Result<Option<(ClassHistory, Option<Class>)>> {
        let now = chrono::Utc::now().timestamp();

        let result = ClassHistories::update_many()
            .col_expr(Column::Status, Expr::value(RecordStatus::Active.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(history_id))
            .filter(Column::Status.eq(RecordStatus::Deleted.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                GradeSystemError::database_operation(format!("恢复班级历史失败: {e}"))
            })?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_class_history_with_class_impl(history_id).await
    }
}
