use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassHistoryService;
use crate::errors::ApiError;

pub async fn delete_class_history(
    service: &ClassHistoryService,
    request: &HttpRequest,
    history_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 软删除：记录保留，默认查询不可见
    if storage
        .delete_class_history(history_id)
        .await
        .map_err(ApiError::from)?
    {
        info!("Class history {} deleted", history_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::not_found("cannot find class history").into())
    }
}
