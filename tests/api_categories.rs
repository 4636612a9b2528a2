mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn index_greets() {
    let app = common::app().await;

    let (status, body) = common::get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Cooksoo Cafe admin API");
}

#[tokio::test]
async fn lists_seeded_categories() {
    let app = common::app().await;

    for uri in ["/categories", "/add_category"] {
        let (status, body) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|category| category["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["Beverages", "Main Dishes", "Desserts"]);
    }
}

#[tokio::test]
async fn creating_a_category_twice_returns_the_existing_row() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_category", "name=Snacks").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Category created!");
    let id = body["category"]["id"].clone();
    assert_eq!(id, json!(4));

    let (status, body) = common::post(&app, "/add_category", "name=Snacks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category already exists");
    assert_eq!(body["category"]["id"], id);

    let (_, body) = common::get(&app, "/categories").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn rejects_missing_or_empty_category_names() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_category", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = common::post(&app, "/add_category", "name=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["name"].is_array());

    let (_, body) = common::get(&app, "/categories").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn edits_a_category() {
    let app = common::app().await;

    let (status, body) = common::get(&app, "/edit_category/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Desserts");
    assert!(body["updated_at"].is_null());

    let (status, _) = common::post(&app, "/edit_category/3", "name=Sweets").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, "/edit_category/3").await;
    assert_eq!(body["name"], "Sweets");
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn editing_reports_missing_and_taken_categories() {
    let app = common::app().await;

    let (status, body) = common::get(&app, "/edit_category/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");

    let (status, _) = common::post(&app, "/edit_category/42", "name=Ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::post(&app, "/edit_category/3", "name=Beverages").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = common::get(&app, "/edit_category/3").await;
    assert_eq!(body["name"], "Desserts");
}

#[tokio::test]
async fn deleting_a_category_leaves_its_dishes_behind() {
    let app = common::app().await;

    let (status, _) = common::post(&app, "/delete_category/1", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::get(&app, "/edit_category/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = common::get(&app, "/menu?category_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["name"], "Green Tea");
    assert_eq!(body[0]["category_id"], 1);

    let (status, body) = common::get(&app, "/sub_categories?category_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = common::post(&app, "/delete_category/1", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_sub_categories_by_category() {
    let app = common::app().await;

    let (_, body) = common::get(&app, "/sub_categories").await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (_, body) = common::get(&app, "/sub_categories?category_id=").await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (_, body) = common::get(&app, "/add_sub_category?category_id=3").await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|sub_category| sub_category["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["Cakes", "Ice Cream"]);

    let (status, _) = common::get(&app, "/sub_categories?category_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sub_categories_require_an_existing_category() {
    let app = common::app().await;

    let (status, body) =
        common::post(&app, "/add_sub_category", "name=Chips&category_id=42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");

    let (status, body) =
        common::post(&app, "/add_sub_category", "name=Chips&category_id=2").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sub_category"]["id"], 9);

    // the same name may live under another category
    let (status, body) = common::post(&app, "/add_sub_category", "name=Chips&category_id=3").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sub_category"]["id"], 10);

    let (status, body) =
        common::post(&app, "/add_sub_category", "name=Chips&category_id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sub-category already exists");
    assert_eq!(body["sub_category"]["id"], 9);
}

#[tokio::test]
async fn edits_and_deletes_sub_categories() {
    let app = common::app().await;

    let (status, _) =
        common::post(&app, "/edit_sub_category/1", "name=Espresso&category_id=1").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, "/edit_sub_category/1").await;
    assert_eq!(body["name"], "Espresso");

    let (status, _) = common::post(&app, "/edit_sub_category/1", "name=Tea&category_id=1").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) =
        common::post(&app, "/edit_sub_category/1", "name=Espresso&category_id=42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::post(&app, "/delete_sub_category/2", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::get(&app, "/edit_sub_category/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // tea dishes keep the removed sub-category id
    let (_, body) = common::get(&app, "/edit_dish/1").await;
    assert_eq!(body["sub_category_id"], 2);

    let (status, _) = common::post(&app, "/delete_sub_category/2", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sub_categories_with_dishes_stay_in_their_category() {
    let app = common::app().await;

    let (status, body) =
        common::post(&app, "/edit_sub_category/2", "name=Tea&category_id=3").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Sub-category still has dishes and cannot change category"
    );

    let (_, body) = common::get(&app, "/edit_sub_category/2").await;
    assert_eq!(body["category_id"], 1);

    // renaming in place is still allowed
    let (status, _) =
        common::post(&app, "/edit_sub_category/2", "name=Herbal+Tea&category_id=1").await;
    assert_eq!(status, StatusCode::OK);

    // Coffee has no dishes yet
    let (status, _) =
        common::post(&app, "/edit_sub_category/1", "name=Coffee&category_id=3").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, "/edit_sub_category/1").await;
    assert_eq!(body["category_id"], 3);
}
