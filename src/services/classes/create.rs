use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::ApiError;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::classes::responses::ClassResponse;
use crate::utils::check_required_fields;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    payload: serde_json::Value,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 必填字段校验，先于一切数据库访问
    let check = check_required_fields(&["title"], &payload);
    if !check.ok {
        return Err(ApiError::bad_request(format!(
            "Badly-formed request: {}",
            check.message.unwrap_or_default()
        ))
        .into());
    }

    let class_data: CreateClassRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Badly-formed request: {e}")))?;

    let class = storage
        .create_class(class_data)
        .await
        .map_err(ApiError::from)?;

    info!("Class {} created successfully", class.title);
    Ok(HttpResponse::Created().json(ClassResponse { class }))
}
