use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassHistoryService;
use super::verify::{resolve_associated_class, validate_semester_field, validate_year_field};
use crate::errors::ApiError;
use crate::models::class_histories::requests::CreateClassHistoryRequest;
use crate::models::class_histories::responses::ClassHistoryResponse;
use crate::utils::check_required_fields;

pub async fn create_class_history(
    service: &ClassHistoryService,
    request: &HttpRequest,
    payload: serde_json::Value,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 必填字段校验，先于一切数据库访问
    let check = check_required_fields(&["class_id", "year"], &payload);
    if !check.ok {
        return Err(ApiError::bad_request(check.message.unwrap_or_default()).into());
    }

    // 年份取值校验先于学期交叉校验
    validate_year_field(&payload)?;

    let history_data: CreateClassHistoryRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Badly-formed request: {e}")))?;

    // 取回所属班级；提交了学期时与班级开设学期交叉校验
    let class = resolve_associated_class(&storage, history_data.class_id).await?;
    if let Some(semester) = history_data.semester {
        validate_semester_field(&class, semester)?;
    }

    let history = storage
        .create_class_history(history_data)
        .await
        .map_err(ApiError::from)?;

    info!(
        "Class history {} created for class {}",
        history.id, history.class_id
    );

    // 创建时已取回班级，直接用它合成响应，避免再查一次
    Ok(HttpResponse::Created().json(ClassHistoryResponse {
        class_history: history.show_class(&class),
    }))
}
