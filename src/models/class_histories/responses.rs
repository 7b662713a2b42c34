use serde::Serialize;

use crate::models::common::Semester;

// 班级历史的对外展示结构：历史字段 + 所属班级的部分字段
#[derive(Debug, Serialize)]
pub struct ShapedClassHistory {
    pub class_id: i64,
    pub year: i32,
    pub semester: Semester,
    pub students: Vec<i64>,
    pub class: ClassSummary,
}

// 合成进历史展示结构中的班级摘要
#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub title: String,
    pub category: Option<String>,
    pub grading_system: String,
}

// 单个班级历史响应
#[derive(Debug, Serialize)]
pub struct ClassHistoryResponse {
    pub class_history: ShapedClassHistory,
}

// 班级历史列表响应
#[derive(Debug, Serialize)]
pub struct ClassHistoryListResponse {
    pub class_histories: Vec<ShapedClassHistory>,
}
