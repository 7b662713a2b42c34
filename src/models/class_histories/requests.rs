use serde::Deserialize;

use crate::models::common::Semester;

// 创建班级历史请求
//
// class_id / year 的必填校验以及 year 的取值校验在反序列化之前
// 基于原始 JSON 完成。
#[derive(Debug, Deserialize)]
pub struct CreateClassHistoryRequest {
    pub class_id: i64,
    pub year: i32,
    pub semester: Option<Semester>,
    #[serde(default)]
    pub students: Vec<i64>,
}

// 更新班级历史请求
//
// students 数组由独立路径维护，出现在这里的请求体中会被整体拒绝，
// 所以该结构不包含 students 字段。
#[derive(Debug, Deserialize)]
pub struct UpdateClassHistoryRequest {
    pub class_id: i64,
    pub year: Option<i32>,
    pub semester: Option<Semester>,
}
