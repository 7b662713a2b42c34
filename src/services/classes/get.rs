use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::errors::ApiError;
use crate::models::classes::responses::ClassResponse;

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await.map_err(ApiError::from)? {
        Some(class) => Ok(HttpResponse::Ok().json(ClassResponse { class })),
        None => Err(ApiError::not_found("Resource not found").into()),
    }
}
