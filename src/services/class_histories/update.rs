use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassHistoryService;
use super::verify::{resolve_associated_class, validate_semester_field, validate_year_field};
use crate::errors::ApiError;
use crate::models::class_histories::requests::UpdateClassHistoryRequest;
use crate::models::class_histories::responses::ClassHistoryResponse;
use crate::utils::check_required_fields;

pub async fn update_class_history(
    service: &ClassHistoryService,
    request: &HttpRequest,
    history_id: i64,
    payload: serde_json::Value,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // students 数组由独立路径维护，出现在通用更新里整体拒绝
    if payload.get("students").is_some() {
        return Err(
            ApiError::bad_request("Badly-formed request, invalid field present.").into(),
        );
    }

    let check = check_required_fields(&["class_id"], &payload);
    if !check.ok {
        return Err(ApiError::bad_request(check.message.unwrap_or_default()).into());
    }

    // 年份取值校验先于学期交叉校验
    validate_year_field(&payload)?;

    let update_data: UpdateClassHistoryRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Badly-formed request: {e}")))?;

    // 提交了学期时，重新取回班级做完整的交叉校验
    let verified_class = match update_data.semester {
        Some(semester) => {
            let class = resolve_associated_class(&storage, update_data.class_id).await?;
            validate_semester_field(&class, semester)?;
            Some(class)
        }
        None => None,
    };

    let history = match storage
        .update_class_history(history_id, update_data)
        .await
        .map_err(ApiError::from)?
    {
        Some(history) => history,
        None => return Err(ApiError::not_found("cannot find class history").into()),
    };

    // 学期分支已经取回了班级；否则按更新后的 class_id 取回
    let class = match verified_class {
        Some(class) => class,
        None => resolve_associated_class(&storage, history.class_id).await?,
    };

    Ok(HttpResponse::Ok().json(ClassHistoryResponse {
        class_history: history.show_class(&class),
    }))
}
