use serde::{Deserialize, Serialize};

use super::responses::{ClassSummary, ShapedClassHistory};
use crate::models::classes::entities::Class;
use crate::models::common::Semester;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassHistory {
    // 班级历史ID
    pub id: i64,
    // 所属班级ID
    pub class_id: i64,
    // 开课年份
    pub year: i32,
    // 开课学期
    pub semester: Semester,
    // 选课学生（有序）
    pub students: Vec<i64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ClassHistory {
    /// 与所属班级合成对客户端的展示结构
    ///
    /// 只携带班级的 title / category / grading_system 三个字段，
    /// 不暴露班级的完整行，也不暴露其 ID。
    pub fn show_class(&self, class: &Class) -> ShapedClassHistory {
        ShapedClassHistory {
            class_id: self.class_id,
            year: self.year,
            semester: self.semester,
            students: self.students.clone(),
            class: ClassSummary {
                title: class.title.clone(),
                category: class.category.clone(),
                grading_system: class.grading_system.clone(),
            },
        }
    }
}
