//! 数据模型定义
//!
//! `entities` 为业务模型，`requests`/`responses` 为各实体的请求与响应结构。

pub mod class_histories;
pub mod classes;
pub mod common;

pub use common::response::ErrorBody;
pub use common::semester::Semester;

/// 程序启动时间，用于统计启动耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
