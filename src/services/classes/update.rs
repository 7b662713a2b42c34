use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::errors::ApiError;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::classes::responses::ClassResponse;
use crate::utils::check_required_fields;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    payload: serde_json::Value,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 线上契约：请求体必须携带 _id 与 title
    let check = check_required_fields(&["_id", "title"], &payload);
    if !check.ok {
        return Err(ApiError::bad_request(format!(
            "Badly-formed request: {}",
            check.message.unwrap_or_default()
        ))
        .into());
    }

    let update_data: UpdateClassRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Badly-formed request: {e}")))?;

    match storage
        .update_class(class_id, update_data)
        .await
        .map_err(ApiError::from)?
    {
        Some(class) => Ok(HttpResponse::Ok().json(ClassResponse { class })),
        None => Err(ApiError::not_found("Resource not found").into()),
    }
}
