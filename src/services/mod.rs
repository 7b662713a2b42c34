pub mod class_histories;

pub mod classes;

pub use class_histories::ClassHistoryService;
pub use classes::ClassService;
