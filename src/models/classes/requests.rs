use serde::Deserialize;

use crate::models::common::Semester;

// 创建班级请求
//
// 必填字段（title）在反序列化之前由 checkers 基于原始 JSON 校验，
// 这里只承载通过校验后的数据。
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub title: String,
    pub category: Option<String>,
    #[serde(default)]
    pub semesters_offered: Vec<Semester>,
    pub grading_system: Option<String>,
}

// 更新班级请求
//
// 线上契约要求请求体携带 `_id` 与 `title`；`_id` 只参与必填校验，
// 目标行由路径参数决定。
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub title: String,
    pub category: Option<String>,
    pub semesters_offered: Option<Vec<Semester>>,
    pub grading_system: Option<String>,
}
