use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::ApiError;
use crate::models::classes::responses::ClassResponse;

pub async fn restore_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .restore_class(class_id)
        .await
        .map_err(ApiError::from)?
    {
        Some(class) => {
            info!("Class {} restored", class_id);
            Ok(HttpResponse::Ok().json(ClassResponse { class }))
        }
        None => Err(ApiError::not_found("Resource not found").into()),
    }
}
