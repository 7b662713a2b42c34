use std::sync::Arc;

use crate::models::{
    class_histories::{
        entities::ClassHistory,
        requests::{CreateClassHistoryRequest, UpdateClassHistoryRequest},
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 软删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 恢复被软删除的班级
    async fn restore_class(&self, class_id: i64) -> Result<Option<Class>>;

    /// 班级历史管理方法
    // 创建班级历史
    async fn create_class_history(
        &self,
        history: CreateClassHistoryRequest,
    ) -> Result<ClassHistory>;
    // 通过ID获取班级历史及其所属班级
    async fn get_class_history_with_class(
        &self,
        history_id: i64,
    ) -> Result<Option<(ClassHistory, Option<Class>)>>;
    // 列出班级历史，连带所属班级
    async fn list_class_histories_with_class(&self) -> Result<Vec<(ClassHistory, Option<Class>)>>;
    // 更新班级历史（students 不经过此路径）
    async fn update_class_history(
        &self,
        history_id: i64,
        update: UpdateClassHistoryRequest,
    ) -> Result<Option<ClassHistory>>;
    // 软删除班级历史
    async fn delete_class_history(&self, history_id: i64) -> Result<bool>;
    // 恢复被软删除的班级历史
    async fn restore_class_history(
        &self,
        history_id: i64,
    ) -> Result<Option<(ClassHistory, Option<Class>)>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
