mod common;

use axum::http::StatusCode;
use marketplace_backend::routes::orders::{ORDER_CREATED, ORDER_DELETED, ORDER_UPDATED};
use serde_json::json;

use common::{send_json, send_text, setup_app};

fn order() -> serde_json::Value {
    json!({
        "name": "Move sofa",
        "description": "Third floor, no lift",
        "start_date": "03/01/2024",
        "end_date": "03/10/2024",
        "address": "12 Lenina st.",
        "price": 2500,
        "customer_id": 1,
        "executor_id": 2
    })
}

#[tokio::test]
async fn order_dates_round_trip_unchanged() {
    let (app, _pool) = setup_app().await;

    let (status, text) = send_text(&app, "POST", "/orders/", Some(order())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, ORDER_CREATED);

    let (status, body) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = order();
    expected["id"] = json!(1);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn order_may_reference_missing_users() {
    let (app, pool) = setup_app().await;

    let mut body = order();
    body["customer_id"] = json!(404);
    body["executor_id"] = json!(405);
    let (status, _) = send_text(&app, "POST", "/orders/", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);

    let (_, stored) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(stored["customer_id"], 404);
}

#[tokio::test]
async fn optional_order_fields_default_to_null() {
    let (app, _pool) = setup_app().await;

    let body = json!({ "start_date": "01/15/2024", "end_date": "01/16/2024" });
    let (status, _) = send_text(&app, "POST", "/orders/", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(stored["start_date"], "01/15/2024");
    assert_eq!(stored["name"], serde_json::Value::Null);
    assert_eq!(stored["price"], serde_json::Value::Null);
}

#[tokio::test]
async fn bad_or_missing_dates_are_rejected() {
    let (app, _pool) = setup_app().await;

    let mut body = order();
    body["start_date"] = json!("2024-03-01");
    let (status, resp) = send_json(&app, "POST", "/orders/", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["code"], "invalid_format");

    let mut body = order();
    body.as_object_mut().unwrap().remove("end_date");
    let (status, resp) = send_json(&app, "POST", "/orders/", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["code"], "missing_field");

    let (_, list) = send_json(&app, "GET", "/orders/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_without_dates_keeps_them() {
    let (app, _pool) = setup_app().await;
    send_text(&app, "POST", "/orders/", Some(order())).await;

    let (status, text) =
        send_text(&app, "PUT", "/orders/1", Some(json!({ "price": 3000 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, ORDER_UPDATED);

    let (_, stored) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(stored["price"], 3000);
    assert_eq!(stored["start_date"], "03/01/2024");
    assert_eq!(stored["end_date"], "03/10/2024");
    assert_eq!(stored["name"], "Move sofa");
}

#[tokio::test]
async fn update_with_new_date_reparses_it() {
    let (app, _pool) = setup_app().await;
    send_text(&app, "POST", "/orders/", Some(order())).await;

    let (status, _) =
        send_text(&app, "PUT", "/orders/1", Some(json!({ "end_date": "04/01/2024" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, stored) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(stored["end_date"], "04/01/2024");

    let (status, resp) =
        send_json(&app, "PUT", "/orders/1", Some(json!({ "end_date": "April 1st" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["code"], "invalid_format");
}

#[tokio::test]
async fn deleted_order_is_not_found() {
    let (app, _pool) = setup_app().await;
    send_text(&app, "POST", "/orders/", Some(order())).await;

    let (status, text) = send_text(&app, "DELETE", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, ORDER_DELETED);

    let (status, body) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn null_in_update_clears_executor() {
    let (app, _pool) = setup_app().await;
    let mut body = order();
    body["executor_id"] = json!(5);
    send_text(&app, "POST", "/orders/", Some(body)).await;

    let (status, _) =
        send_text(&app, "PUT", "/orders/1", Some(json!({ "executor_id": null }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = send_json(&app, "GET", "/orders/1", None).await;
    assert_eq!(stored["executor_id"], serde_json::Value::Null);
    assert_eq!(stored["customer_id"], 1);
    assert_eq!(stored["start_date"], "03/01/2024");
}

#[tokio::test]
async fn non_numeric_order_id_is_json_404() {
    let (app, _pool) = setup_app().await;
    let (status, body) = send_json(&app, "DELETE", "/orders/first", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}
