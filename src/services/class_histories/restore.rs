use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassHistoryService;
use crate::errors::ApiError;
use crate::models::class_histories::responses::ClassHistoryResponse;

pub async fn restore_class_history(
    service: &ClassHistoryService,
    request: &HttpRequest,
    history_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (history, class) = match storage
        .restore_class_history(history_id)
        .await
        .map_err(ApiError::from)?
    {
        Some(restored) => restored,
        None => return Err(ApiError::not_found("cannot find class history").into()),
    };

    let class = class.ok_or_else(|| {
        error!("Class history {} has no associated class", history.id);
        ApiError::internal("cannot find associated class")
    })?;

    info!("Class history {} restored", history_id);
    Ok(HttpResponse::Ok().json(ClassHistoryResponse {
        class_history: history.show_class(&class),
    }))
}
