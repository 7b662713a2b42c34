//! 请求参数解析错误处理
//!
//! JSON 请求体或查询参数反序列化失败时，也走统一的
//! {"message": "..."} 错误契约。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::ErrorBody;

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Badly-formed request, expected application/json".to_string(),
        other => format!("Badly-formed request: {other}"),
    };

    let response = HttpResponse::BadRequest().json(ErrorBody::new(message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ErrorBody::new(format!("Badly-formed request: {err}")));
    InternalError::from_response(err, response).into()
}
