//! 学期与年份校验

use serde_json::Value;

use crate::models::common::Semester;

/// 提交的学期必须出现在班级开设的学期列表中
pub fn check_semester(offered: &[Semester], candidate: Semester) -> bool {
    offered.contains(&candidate)
}

/// 年份必须是数字且在 [1900, 2050] 区间内
///
/// 数字字符串（如 "1980"）视为无效，不做宽松解析。
pub fn check_year(candidate: &Value) -> bool {
    match candidate.as_f64() {
        Some(year) => (1900.0..=2050.0).contains(&year),
        None => false,
    }
}
