//! 预导入模块，方便使用

pub use super::class_histories::{
    ActiveModel as ClassHistoryActiveModel, Entity as ClassHistories, Model as ClassHistoryModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
