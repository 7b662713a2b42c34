use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::errors::ApiError;
use crate::models::classes::responses::ClassListResponse;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let classes = storage.list_classes().await.map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(ClassListResponse { classes }))
}
