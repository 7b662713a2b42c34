use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::ApiError;

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 软删除：记录保留，默认查询不可见
    if storage
        .delete_class(class_id)
        .await
        .map_err(ApiError::from)?
    {
        info!("Class {} deleted", class_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::not_found("Resource not found").into())
    }
}
