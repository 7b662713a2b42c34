//! 班级路由的 HTTP 集成测试

mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{delete_resource, get_resource, init_app, post_resource, put_resource,
    simple_put_resource};

#[actix_web::test]
async fn post_saves_a_well_formed_class() {
    let (app, _storage) = init_app().await;

    let well_formed_class = json!({
        "title": "Underwater Basket Weaving",
        "category": "Arts and Farts",
        "semesters_offered": ["FALL", "SPRING"],
        "grading_system": "US - GPA x.y/4.0"
    });

    let (status, body) = post_resource(&app, "/api/classes", well_formed_class).await;
    assert_eq!(status, StatusCode::CREATED);

    let class = body.get("class").expect("response has a class property");
    assert_eq!(class["title"], "Underwater Basket Weaving");
    assert_eq!(class["grading_system"], "US - GPA x.y/4.0");
    assert_eq!(class["semesters_offered"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn post_with_empty_title_is_rejected() {
    let (app, _storage) = init_app().await;

    let badly_formed_class = json!({
        "title": "",
        "category": "Philosophy",
        "semesters_offered": ["SPRING"],
        "grading_system": "FR - x/20"
    });

    let (status, body) = post_resource(&app, "/api/classes", badly_formed_class).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Badly-formed request"));
    assert!(message.contains("required field title empty in request"));
}

#[actix_web::test]
async fn post_with_missing_title_is_rejected() {
    let (app, _storage) = init_app().await;

    let (status, body) =
        post_resource(&app, "/api/classes", json!({ "category": "Philosophy" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("request missing required field title")
    );
}

#[actix_web::test]
async fn post_without_optional_fields_succeeds() {
    let (app, _storage) = init_app().await;

    let another_class = json!({
        "title": "Chemistry 101",
        "category": "Mathematics and Science",
        "grading_system": "US - letter (A, B, C, D, F)"
    });

    let (status, body) = post_resource(&app, "/api/classes", another_class).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["class"]["semesters_offered"], json!([]));
}

#[actix_web::test]
async fn post_defaults_grading_system() {
    let (app, _storage) = init_app().await;

    let (status, body) =
        post_resource(&app, "/api/classes", json!({ "title": "Tongue Wagging 101" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["class"]["grading_system"], "US letter");
}

#[actix_web::test]
async fn get_returns_all_classes() {
    let (app, _storage) = init_app().await;

    for title in ["Class 1", "Class 2", "Class 3", "Class 4"] {
        let (status, _) = post_resource(&app, "/api/classes", json!({ "title": title })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_resource(&app, "/api/classes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classes"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn get_returns_a_specific_class() {
    let (app, _storage) = init_app().await;

    for title in ["Underwater Basket Weaving", "Chemistry 101", "Tongue Wagging 101"] {
        post_resource(&app, "/api/classes", json!({ "title": title })).await;
    }

    let (_, body) = get_resource(&app, "/api/classes").await;
    let class_id = body["classes"][0]["id"].as_i64().unwrap();

    let (status, body) = get_resource(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class"]["id"].as_i64().unwrap(), class_id);
}

#[actix_web::test]
async fn get_unknown_class_is_404() {
    let (app, _storage) = init_app().await;

    let (status, body) = get_resource(&app, "/api/classes/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");

    // 非数字 ID 同样按 404 处理
    let (status, _) = get_resource(&app, "/api/classes/not-an-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn put_updates_a_class_when_well_formed() {
    let (app, _storage) = init_app().await;

    let (_, body) = post_resource(
        &app,
        "/api/classes",
        json!({ "title": "Underwater Basket Reaving", "category": "Arts and Farts" }),
    )
    .await;
    let class_id = body["class"]["id"].as_i64().unwrap();

    let updated_class = json!({ "_id": class_id, "title": "Underwater Basket Weaving" });
    let (status, body) =
        put_resource(&app, &format!("/api/classes/{class_id}"), updated_class).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class"]["title"], "Underwater Basket Weaving");
    // 未提交的字段保持原值
    assert_eq!(body["class"]["category"], "Arts and Farts");
}

#[actix_web::test]
async fn put_unknown_class_is_404() {
    let (app, _storage) = init_app().await;

    let (status, _) = put_resource(
        &app,
        "/api/classes/424242",
        json!({ "_id": 424242, "title": "Chemistry 102" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn put_badly_formed_is_400() {
    let (app, _storage) = init_app().await;

    let (_, body) = post_resource(&app, "/api/classes", json!({ "title": "Chemistry 101" })).await;
    let class_id = body["class"]["id"].as_i64().unwrap();

    // title 为空
    let (status, _) = put_resource(
        &app,
        &format!("/api/classes/{class_id}"),
        json!({ "_id": class_id, "semesters_offered": ["SPRING", "FALL"], "title": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 缺少 _id
    let (status, body) = put_resource(
        &app,
        &format!("/api/classes/{class_id}"),
        json!({ "title": "Chemistry 102" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("request missing required field _id")
    );
}

#[actix_web::test]
async fn delete_then_fetch_is_404() {
    let (app, _storage) = init_app().await;

    let (_, body) = post_resource(&app, "/api/classes", json!({ "title": "Chemistry 101" })).await;
    let class_id = body["class"]["id"].as_i64().unwrap();

    let (status, body) = delete_resource(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get_resource(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 再次删除同一 ID 也为 404
    let (status, _) = delete_resource(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_unknown_class_is_404() {
    let (app, _storage) = init_app().await;

    let (status, _) = delete_resource(&app, "/api/classes/424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn restore_brings_a_deleted_class_back() {
    let (app, _storage) = init_app().await;

    let (_, body) = post_resource(&app, "/api/classes", json!({ "title": "Chemistry 101" })).await;
    let class_id = body["class"]["id"].as_i64().unwrap();

    delete_resource(&app, &format!("/api/classes/{class_id}")).await;

    let (status, body) =
        simple_put_resource(&app, &format!("/api/classes/{class_id}/restore")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["class"]["title"], "Chemistry 101");

    let (status, _) = get_resource(&app, &format!("/api/classes/{class_id}")).await;
    assert_eq!(status, StatusCode::OK);

    // 未删除的班级无法 restore
    let (status, _) = simple_put_resource(&app, &format!("/api/classes/{class_id}/restore")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unmatched_route_is_resource_not_found() {
    let (app, _storage) = init_app().await;

    let (status, body) = get_resource(&app, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");
}
