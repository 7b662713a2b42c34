use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ClassHistoryService;
use crate::utils::SafeClassHistoryIdI64;

// 懒加载的全局 CLASS_HISTORY_SERVICE 实例
static CLASS_HISTORY_SERVICE: Lazy<ClassHistoryService> =
    Lazy::new(ClassHistoryService::new_lazy);

// HTTP处理程序
pub async fn list_class_histories(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE.list_class_histories(&req).await
}

pub async fn create_class_history(
    req: HttpRequest,
    payload: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE
        .create_class_history(&req, payload.into_inner())
        .await
}

pub async fn get_class_history(
    req: HttpRequest,
    history_id: SafeClassHistoryIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE
        .get_class_history(&req, history_id.0)
        .await
}

pub async fn update_class_history(
    req: HttpRequest,
    history_id: SafeClassHistoryIdI64,
    payload: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE
        .update_class_history(&req, history_id.0, payload.into_inner())
        .await
}

pub async fn delete_class_history(
    req: HttpRequest,
    history_id: SafeClassHistoryIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE
        .delete_class_history(&req, history_id.0)
        .await
}

pub async fn restore_class_history(
    req: HttpRequest,
    history_id: SafeClassHistoryIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_HISTORY_SERVICE
        .restore_class_history(&req, history_id.0)
        .await
}

// 配置路由
pub fn configure_class_histories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/class-histories")
            .service(
                web::resource("")
                    .route(web::get().to(list_class_histories))
                    .route(web::post().to(create_class_history)),
            )
            .service(
                // 恢复被软删除的班级历史
                web::resource("/{history_id}/restore")
                    .route(web::put().to(restore_class_history)),
            )
            .service(
                web::resource("/{history_id}")
                    .route(web::get().to(get_class_history))
                    .route(web::put().to(update_class_history))
                    .route(web::delete().to(delete_class_history)),
            ),
    );
}
