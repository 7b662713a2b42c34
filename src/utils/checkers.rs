//! 请求体必填字段检查

use serde_json::Value;

/// 必填字段检查结果
#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub ok: bool,
    pub message: Option<String>,
}

impl FieldCheck {
    fn ok() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    fn fail(message: String) -> Self {
        Self {
            ok: false,
            message: Some(message),
        }
    }
}

/// 按给定顺序检查请求体中的必填字段
///
/// 字段缺失或取值为空（null、空串、0、false、空数组、空对象）都算失败，
/// 第一个失败的字段决定返回的消息。
pub fn check_required_fields(required: &[&str], payload: &Value) -> FieldCheck {
    for field in required {
        match payload.get(field) {
            None => {
                return FieldCheck::fail(format!("request missing required field {field}"));
            }
            Some(value) if is_empty_value(value) => {
                return FieldCheck::fail(format!("required field {field} empty in request"));
            }
            Some(_) => {}
        }
    }

    FieldCheck::ok()
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
