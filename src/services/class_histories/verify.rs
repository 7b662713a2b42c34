//! 班级历史写入前的校验
//!
//! 年份的取值校验在原始 JSON 上进行，学期校验需要先取回
//! 所属班级再做交叉比对。

use std::sync::Arc;

use tracing::error;

use crate::errors::ApiError;
use crate::models::classes::entities::Class;
use crate::models::common::Semester;
use crate::storage::Storage;
use crate::utils::{check_semester, check_year};

/// year 字段存在时校验取值，无效则拒绝请求
///
/// 年份必须是数字；数字字符串视为无效。
pub(super) fn validate_year_field(payload: &serde_json::Value) -> Result<(), ApiError> {
    if let Some(year) = payload.get("year")
        && !check_year(year)
    {
        return Err(ApiError::bad_request("invalid year"));
    }

    Ok(())
}

/// 取回班级历史所引用的班级，找不到时返回 404
pub(super) async fn resolve_associated_class(
    storage: &Arc<dyn Storage>,
    class_id: i64,
) -> Result<Class, ApiError> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(class),
        Ok(None) => Err(ApiError::not_found("cannot find associated class")),
        Err(e) => {
            error!("Failed to fetch associated class {}: {}", class_id, e);
            Err(ApiError::from(e))
        }
    }
}

/// 提交的学期必须是所属班级开设的学期之一
pub(super) fn validate_semester_field(class: &Class, semester: Semester) -> Result<(), ApiError> {
    if !check_semester(&class.semesters_offered, semester) {
        return Err(ApiError::bad_request("invalid semester"));
    }

    Ok(())
}
