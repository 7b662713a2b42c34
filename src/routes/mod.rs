pub mod class_histories;

pub mod classes;

pub use class_histories::configure_class_histories_routes;
pub use classes::configure_classes_routes;

use actix_web::HttpResponse;

use crate::models::ErrorBody;

// 兜底路由：未匹配的请求统一返回 404
pub async fn resource_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Resource not found"))
}
