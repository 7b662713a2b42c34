use serde::Serialize;

// 统一的错误响应体：所有错误出口都返回 {"message": "..."}
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
