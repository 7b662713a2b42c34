pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod restore;
pub mod update;
mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ClassHistoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassHistoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建班级历史
    pub async fn create_class_history(
        &self,
        request: &HttpRequest,
        payload: serde_json::Value,
    ) -> ActixResult<HttpResponse> {
        create::create_class_history(self, request, payload).await
    }

    // 获取班级历史列表
    pub async fn list_class_histories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_class_histories(self, request).await
    }

    // 根据 ID 获取班级历史
    pub async fn get_class_history(
        &self,
        request: &HttpRequest,
        history_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_history(self, request, history_id).await
    }

    // 更新班级历史（students 以外的字段）
    pub async fn update_class_history(
        &self,
        request: &HttpRequest,
        history_id: i64,
        payload: serde_json::Value,
    ) -> ActixResult<HttpResponse> {
        update::update_class_history(self, request, history_id, payload).await
    }

    // 根据 ID 软删除班级历史
    pub async fn delete_class_history(
        &self,
        request: &HttpRequest,
        history_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class_history(self, request, history_id).await
    }

    // 恢复被软删除的班级历史
    pub async fn restore_class_history(
        &self,
        request: &HttpRequest,
        history_id: i64,
    ) -> ActixResult<HttpResponse> {
        restore::restore_class_history(self, request, history_id).await
    }
}
