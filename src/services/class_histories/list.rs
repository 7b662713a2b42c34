use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassHistoryService;
use crate::errors::ApiError;
use crate::models::class_histories::responses::ClassHistoryListResponse;

pub async fn list_class_histories(
    service: &ClassHistoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let histories = storage
        .list_class_histories_with_class()
        .await
        .map_err(ApiError::from)?;

    let mut class_histories = Vec::with_capacity(histories.len());
    for (history, class) in histories {
        match class {
            Some(class) => class_histories.push(history.show_class(&class)),
            None => {
                // 所属班级丢失说明数据不一致，整个请求按内部错误处理
                error!("Class history {} has no associated class", history.id);
                return Err(ApiError::internal("cannot find associated class").into());
            }
        }
    }

    Ok(HttpResponse::Ok().json(ClassHistoryListResponse { class_histories }))
}
