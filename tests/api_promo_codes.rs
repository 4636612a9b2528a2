mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};

#[tokio::test]
async fn creates_a_promo_code_with_its_qr_image() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_promocode", "code=SAVE10&discount=10").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Promo code created!");
    assert_eq!(body["promo_code"]["code"], "SAVE10");
    assert_eq!(body["promo_code"]["discount"], 10.0);

    let png = BASE64_STANDARD
        .decode(body["promo_code"]["qr_code"].as_str().unwrap())
        .unwrap();
    assert_eq!(common::decode_qr(&png), "SAVE10");
}

#[tokio::test]
async fn serves_the_stored_qr_image() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_promocode", "code=WELCOME&discount=5.5").await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["promo_code"]["id"].as_i64().unwrap();

    let request = Request::builder()
        .uri(format!("/promocodes/{id}/qr"))
        .body(Body::empty())
        .unwrap();
    let (status, headers, png) = common::send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(common::decode_qr(&png), "WELCOME");

    let (status, body) = common::get(&app, "/promocodes/99/qr").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Promo code not found");
}

#[tokio::test]
async fn creating_a_promo_code_twice_keeps_the_first_row() {
    let app = common::app().await;

    let (_, first) = common::post(&app, "/add_promocode", "code=SAVE10&discount=10").await;

    let (status, second) = common::post(&app, "/add_promocode", "code=SAVE10&discount=25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["message"], "Promo code already exists");
    assert_eq!(second["promo_code"]["id"], first["promo_code"]["id"]);
    assert_eq!(second["promo_code"]["discount"], 10.0);
    assert_eq!(second["promo_code"]["qr_code"], first["promo_code"]["qr_code"]);

    for uri in ["/promocodes", "/add_promocode"] {
        let (status, body) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert!(body[0]["qr_code"].is_string());
    }
}

#[tokio::test]
async fn rejects_invalid_promo_codes() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_promocode", "code=&discount=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["code"].is_array());

    let (status, body) = common::post(&app, "/add_promocode", "code=SAVE10&discount=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["discount"].is_array());

    let (status, _) = common::post(&app, "/add_promocode", "code=SAVE10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = common::get(&app, "/promocodes").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_discounts_that_are_not_finite() {
    let app = common::app().await;

    for discount in ["NaN", "inf"] {
        let form = format!("code=NANCODE&discount={discount}");
        let (status, body) = common::post(&app, "/add_promocode", &form).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "discount={discount}");
        assert!(body["errors"]["discount"].is_array());
    }

    let (_, body) = common::get(&app, "/promocodes").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deletes_a_promo_code() {
    let app = common::app().await;

    common::post(&app, "/add_promocode", "code=SAVE10&discount=10").await;

    let (status, body) = common::post(&app, "/delete_promocode/1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Promo code deleted successfully");

    let (status, _) = common::post(&app, "/delete_promocode/1", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = common::get(&app, "/promocodes").await;
    assert!(body.as_array().unwrap().is_empty());
}
