use serde::{Deserialize, Serialize};

use crate::models::common::Semester;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub title: String,
    // 分类
    pub category: Option<String>,
    // 开设学期（允许重复，顺序无意义）
    pub semesters_offered: Vec<Semester>,
    // 评分制度
    pub grading_system: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
