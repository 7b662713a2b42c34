use serde::Serialize;

use super::entities::Class;

// 单个班级响应
#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub class: Class,
}

// 班级列表响应
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub classes: Vec<Class>,
}
