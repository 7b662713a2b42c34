//! 班级历史路由的 HTTP 集成测试

mod common;

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use serde_json::{Value, json};

use rust_gradesystem::storage::Storage;

use common::{delete_resource, get_resource, init_app, post_resource, put_resource,
    simple_put_resource};

const BASE_URL: &str = "/api/class-histories";

/// 建一个开设 FALL / SPRING 的班级，返回其 ID
async fn create_weaving_class<S, B>(app: &S) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let new_class = json!({
        "title": "Underwater Basket Weaving",
        "category": "Arts and Farts",
        "semesters_offered": ["FALL", "SPRING"],
        "grading_system": "US - GPA x.y/4.0"
    });

    let (status, body) = post_resource(app, "/api/classes", new_class).await;
    assert_eq!(status, StatusCode::CREATED);
    body["class"]["id"].as_i64().unwrap()
}

/// 建一条班级历史并返回其 ID
///
/// 展示结构不携带历史自身的 ID，这里从存储层取最新一条。
async fn create_history<S, B>(app: &S, storage: &Arc<dyn Storage>, payload: Value) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, _) = post_resource(app, BASE_URL, payload).await;
    assert_eq!(status, StatusCode::CREATED);

    storage
        .list_class_histories_with_class()
        .await
        .expect("failed to list class histories")
        .last()
        .map(|(history, _)| history.id)
        .expect("no class history was created")
}

#[actix_web::test]
async fn post_creates_a_class_history() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    let new_class_history = json!({
        "class_id": class_id,
        "year": 2019,
        "semester": "SPRING",
        "students": []
    });

    let (status, body) = post_resource(&app, BASE_URL, new_class_history).await;
    assert_eq!(status, StatusCode::CREATED);

    let class_history = body.get("class_history").expect("response has class_history");
    assert_eq!(class_history["class_id"].as_i64().unwrap(), class_id);
    assert_eq!(class_history["year"], 2019);
    assert_eq!(class_history["semester"], "SPRING");
    assert_eq!(class_history["students"], json!([]));
    assert_eq!(class_history["class"]["title"], "Underwater Basket Weaving");
}

#[actix_web::test]
async fn post_without_semester_defaults_to_not_applicable() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    let (status, body) =
        post_resource(&app, BASE_URL, json!({ "class_id": class_id, "year": 2019 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["class_history"]["semester"], "N/A");
}

#[actix_web::test]
async fn post_with_unoffered_semester_is_400() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    let (status, body) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": class_id, "year": 2019, "semester": "SUMMER" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid semester");
}

#[actix_web::test]
async fn post_with_unknown_semester_spelling_is_400() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    // 精确匹配，不做大小写归一化
    let (status, _) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": class_id, "year": 2019, "semester": "spring" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn post_with_string_year_is_400() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    let (status, body) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": class_id, "year": "1980" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid year");

    // 同一年份的数字形式可以通过
    let (status, _) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": class_id, "year": 1980 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn post_year_range_boundaries() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    for year in [1900, 2050] {
        let (status, _) = post_resource(
            &app,
            BASE_URL,
            json!({ "class_id": class_id, "year": year }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "year {year} should be accepted");
    }

    for year in [1899, 2051] {
        let (status, body) = post_resource(
            &app,
            BASE_URL,
            json!({ "class_id": class_id, "year": year }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "year {year} should be rejected");
        assert_eq!(body["message"], "invalid year");
    }
}

#[actix_web::test]
async fn post_with_missing_required_fields_is_400() {
    let (app, _storage) = init_app().await;

    let (status, body) = post_resource(&app, BASE_URL, json!({ "year": 2019 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "request missing required field class_id");

    let (status, body) = post_resource(&app, BASE_URL, json!({ "class_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "request missing required field year");

    // 必填校验先于年份取值校验，消息按字段顺序报第一个失败
    let (status, body) = post_resource(&app, BASE_URL, json!({ "year": "1980" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "request missing required field class_id");
}

#[actix_web::test]
async fn post_year_check_runs_before_class_lookup() {
    let (app, _storage) = init_app().await;

    // class_id 不存在且年份非法时，年份先被拒绝
    let (status, body) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": 424242, "year": "1980" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid year");
}

#[actix_web::test]
async fn post_against_unknown_class_is_404() {
    let (app, _storage) = init_app().await;

    let (status, body) = post_resource(
        &app,
        BASE_URL,
        json!({ "class_id": 424242, "year": 2019, "semester": "SPRING" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "cannot find associated class");
}

#[actix_web::test]
async fn get_returns_histories_joined_with_class_subset() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    for year in [2018, 2019] {
        post_resource(
            &app,
            BASE_URL,
            json!({ "class_id": class_id, "year": year, "semester": "FALL" }),
        )
        .await;
    }

    let (status, body) = get_resource(&app, BASE_URL).await;
    assert_eq!(status, StatusCode::OK);

    let class_histories = body["class_histories"].as_array().unwrap();
    assert_eq!(class_histories.len(), 2);

    for class_history in class_histories {
        let class = class_history["class"].as_object().unwrap();
        assert_eq!(class["title"], "Underwater Basket Weaving");
        assert_eq!(class["category"], "Arts and Farts");
        assert_eq!(class["grading_system"], "US - GPA x.y/4.0");
        // 合成的班级摘要只有这三个字段，不泄露班级 ID
        assert_eq!(class.len(), 3);
    }
}

#[actix_web::test]
async fn get_returns_a_specific_history() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019, "semester": "FALL" }),
    )
    .await;

    let (status, body) = get_resource(&app, &format!("{BASE_URL}/{history_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_history"]["year"], 2019);
    assert_eq!(body["class_history"]["class_id"].as_i64().unwrap(), class_id);
}

#[actix_web::test]
async fn get_unknown_history_is_404() {
    let (app, _storage) = init_app().await;

    let (status, body) = get_resource(&app, &format!("{BASE_URL}/424242")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "cannot find class history");
}

#[actix_web::test]
async fn put_with_students_field_is_rejected() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019 }),
    )
    .await;

    // 其他字段全部合法也一样拒绝
    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/{history_id}"),
        json!({ "class_id": class_id, "year": 2020, "students": [1, 2] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Badly-formed request, invalid field present.");
}

#[actix_web::test]
async fn put_requires_class_id() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019 }),
    )
    .await;

    let (status, body) =
        put_resource(&app, &format!("{BASE_URL}/{history_id}"), json!({ "year": 2020 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "request missing required field class_id");
}

#[actix_web::test]
async fn put_updates_year() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019, "semester": "FALL" }),
    )
    .await;

    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/{history_id}"),
        json!({ "class_id": class_id, "year": 2020 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_history"]["year"], 2020);
    // 未提交的学期保持原值
    assert_eq!(body["class_history"]["semester"], "FALL");
    assert_eq!(body["class_history"]["class"]["title"], "Underwater Basket Weaving");
}

#[actix_web::test]
async fn put_with_invalid_year_is_400() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019 }),
    )
    .await;

    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/{history_id}"),
        json!({ "class_id": class_id, "year": 3000 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid year");
}

#[actix_web::test]
async fn put_recrosschecks_semester_against_class() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019, "semester": "FALL" }),
    )
    .await;

    // SUMMER 不在开设学期里
    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/{history_id}"),
        json!({ "class_id": class_id, "semester": "SUMMER" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid semester");

    // SPRING 在开设学期里，更新通过
    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/{history_id}"),
        json!({ "class_id": class_id, "semester": "SPRING" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_history"]["semester"], "SPRING");
}

#[actix_web::test]
async fn put_unknown_history_is_404() {
    let (app, _storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;

    let (status, body) = put_resource(
        &app,
        &format!("{BASE_URL}/424242"),
        json!({ "class_id": class_id, "year": 2020 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "cannot find class history");
}

#[actix_web::test]
async fn delete_then_fetch_is_404() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019 }),
    )
    .await;

    let (status, body) = delete_resource(&app, &format!("{BASE_URL}/{history_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get_resource(&app, &format!("{BASE_URL}/{history_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete_resource(&app, &format!("{BASE_URL}/424242")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "cannot find class history");
}

#[actix_web::test]
async fn restore_brings_a_deleted_history_back() {
    let (app, storage) = init_app().await;
    let class_id = create_weaving_class(&app).await;
    let history_id = create_history(
        &app,
        &storage,
        json!({ "class_id": class_id, "year": 2019, "semester": "SPRING" }),
    )
    .await;

    delete_resource(&app, &format!("{BASE_URL}/{history_id}")).await;

    let (status, body) =
        simple_put_resource(&app, &format!("{BASE_URL}/{history_id}/restore")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class_history"]["year"], 2019);
    assert_eq!(body["class_history"]["class"]["title"], "Underwater Basket Weaving");

    let (status, _) = get_resource(&app, &format!("{BASE_URL}/{history_id}")).await;
    assert_eq!(status, StatusCode::OK);

    // 未删除的历史无法 restore
    let (status, _) =
        simple_put_resource(&app, &format!("{BASE_URL}/{history_id}/restore")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
