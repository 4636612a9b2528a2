mod common;

use axum::{http::StatusCode, Router};
use serde_json::Value;

async fn customer(app: &Router) -> i64 {
    let (status, body) =
        common::post(app, "/create_user", "name=Aida&phone=0555123456&role=user").await;
    assert_eq!(status, StatusCode::CREATED);
    body["user"]["id"].as_i64().unwrap()
}

async fn order(app: &Router, user_id: i64, dish_id: i64) -> i64 {
    let (status, body) = common::post(
        app,
        "/make_order",
        &format!("description=No+sugar&user_id={user_id}&dish_id={dish_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["order"]["id"].as_i64().unwrap()
}

async fn status_of(app: &Router, order_id: i64) -> Value {
    let (status, body) = common::get(app, &format!("/order_details/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    body["status"].clone()
}

#[tokio::test]
async fn new_orders_start_pending() {
    let app = common::app().await;
    let user_id = customer(&app).await;

    let (status, body) = common::post(
        &app,
        "/make_order",
        &format!("description=no+onions&user_id={user_id}&dish_id=9"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created!");
    assert_eq!(body["order"]["status"], "Pending");
    assert_eq!(body["order"]["description"], "no onions");
    assert_eq!(body["order"]["user_id"], user_id);
    assert_eq!(body["order"]["dish_id"], 9);

    let (status, body) = common::get(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["status"], "Pending");
    assert_eq!(body[0]["dish_name"], "Classic Beef Burger");
    assert_eq!(body[0]["user_name"], "Aida");

    let (status, body) = common::get(&app, "/order_details/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "no onions");
}

#[tokio::test]
async fn accepts_an_empty_description() {
    let app = common::app().await;
    let user_id = customer(&app).await;

    let (status, body) = common::post(
        &app,
        "/make_order",
        &format!("description=&user_id={user_id}&dish_id=1"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["description"], "");
}

#[tokio::test]
async fn rejects_incomplete_orders() {
    let app = common::app().await;
    let user_id = customer(&app).await;

    let (status, _) =
        common::post(&app, "/make_order", &format!("user_id={user_id}&dish_id=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        common::post(&app, "/make_order", &format!("description=x&user_id={user_id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = common::post(&app, "/make_order", "description=x&user_id=42&dish_id=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, body) = common::post(
        &app,
        "/make_order",
        &format!("description=x&user_id={user_id}&dish_id=42"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish not found");

    let (_, body) = common::get(&app, "/orders").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn sends_an_order_to_the_kitchen() {
    let app = common::app().await;
    let user_id = customer(&app).await;
    let order_id = order(&app, user_id, 7).await;

    let (status, body) =
        common::post(&app, &format!("/send_order_to_kitchen/{order_id}"), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);
    assert_eq!(status_of(&app, order_id).await, "In Kitchen");
}

#[tokio::test]
async fn sending_a_missing_order_to_the_kitchen_is_a_no_op() {
    let app = common::app().await;
    let user_id = customer(&app).await;
    let order_id = order(&app, user_id, 7).await;

    let (status, body) = common::post(&app, "/send_order_to_kitchen/999", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], false);

    let (_, body) = common::get(&app, "/orders").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(status_of(&app, order_id).await, "Pending");
}

#[tokio::test]
async fn moves_between_any_two_statuses() {
    let app = common::app().await;
    let user_id = customer(&app).await;
    let order_id = order(&app, user_id, 7).await;
    let uri = format!("/update_order_status/{order_id}");

    for status in ["Ready+for+Pickup", "Completed", "Pending", "In%20Kitchen"] {
        let (code, body) = common::post(&app, &uri, &format!("status={status}")).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body["message"], "Order status updated successfully");
    }

    assert_eq!(status_of(&app, order_id).await, "In Kitchen");
}

#[tokio::test]
async fn rejects_statuses_outside_the_workflow() {
    let app = common::app().await;
    let user_id = customer(&app).await;
    let order_id = order(&app, user_id, 7).await;
    let uri = format!("/update_order_status/{order_id}");

    for status in ["Cancelled", "completed", ""] {
        let (code, body) = common::post(&app, &uri, &format!("status={status}")).await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid order status");
    }

    let (code, _) = common::post(&app, &uri, "").await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    assert_eq!(status_of(&app, order_id).await, "Pending");
}

#[tokio::test]
async fn updating_a_missing_order_is_not_found() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/update_order_status/999", "status=Completed").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");

    // status is checked before the order is looked up
    let (status, _) = common::post(&app, "/update_order_status/999", "status=Lost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = common::get(&app, "/orders").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn orders_outlive_their_dish() {
    let app = common::app().await;
    let user_id = customer(&app).await;
    let order_id = order(&app, user_id, 9).await;

    let (status, _) = common::post(&app, "/delete_dish/9", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = common::get(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], order_id);
    assert_eq!(body[0]["dish_id"], 9);
    assert_eq!(body[0]["dish_name"], Value::Null);
    assert_eq!(body[0]["user_name"], "Aida");
}

#[tokio::test]
async fn order_details_of_a_missing_order_is_not_found() {
    let app = common::app().await;

    let (status, body) = common::get(&app, "/order_details/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn order_form_offers_customers_and_dishes() {
    let app = common::app().await;
    customer(&app).await;
    let (status, _) = common::post(&app, "/add_courier", "name=Bolot&phone=0700111222").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = common::get(&app, "/make_order").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["role"], "user");
    assert_eq!(body["dishes"].as_array().unwrap().len(), 16);
}
