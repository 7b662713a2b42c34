//! 路径参数安全提取器
//!
//! 路径中的 ID 解析失败时直接返回 404，与查询不存在记录的
//! 行为保持一致。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::errors::ApiError;

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                ready(
                    req.match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .map($name)
                        .ok_or_else(|| ApiError::not_found("Resource not found").into()),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeClassHistoryIdI64, "history_id");
