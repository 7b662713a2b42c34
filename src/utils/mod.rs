pub mod checkers;
pub mod extractor;
pub mod parameter_error_handler;
pub mod verifiers;

pub use checkers::{FieldCheck, check_required_fields};
pub use extractor::{SafeClassHistoryIdI64, SafeClassIdI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use verifiers::{check_semester, check_year};
