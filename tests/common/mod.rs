//! 测试辅助：独立内存数据库 + 完整路由的测试应用

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use rust_gradesystem::routes;
use rust_gradesystem::storage::Storage;
use rust_gradesystem::storage::sea_orm_storage::SeaOrmStorage;
use rust_gradesystem::utils::{json_error_handler, query_error_handler};

// 每个测试一个独立的共享缓存内存库，避免连接池各连各的库
static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

pub async fn init_app() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    Arc<dyn Storage>,
) {
    let db_url = format!(
        "sqlite:file:gradesystem_test_{}?mode=memory&cache=shared",
        DB_SEQ.fetch_add(1, Ordering::SeqCst)
    );

    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::connect(&db_url)
            .await
            .expect("Failed to create in-memory storage"),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(storage.clone()))
            .configure(routes::configure_classes_routes)
            .configure(routes::configure_class_histories_routes)
            .default_service(web::route().to(routes::resource_not_found)),
    )
    .await;

    (app, storage)
}

async fn into_status_and_json<B: MessageBody>(res: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not valid JSON")
    };
    (status, body)
}

pub async fn post_resource<S, B>(app: &S, url: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post().uri(url).set_json(&body).to_request();
    into_status_and_json(test::call_service(app, req).await).await
}

pub async fn get_resource<S, B>(app: &S, url: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(url).to_request();
    into_status_and_json(test::call_service(app, req).await).await
}

pub async fn put_resource<S, B>(app: &S, url: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::put().uri(url).set_json(&body).to_request();
    into_status_and_json(test::call_service(app, req).await).await
}

/// 不带请求体的 PUT（restore 端点用）
pub async fn simple_put_resource<S, B>(app: &S, url: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::put().uri(url).to_request();
    into_status_and_json(test::call_service(app, req).await).await
}

pub async fn delete_resource<S, B>(app: &S, url: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::delete().uri(url).to_request();
    into_status_and_json(test::call_service(app, req).await).await
}
