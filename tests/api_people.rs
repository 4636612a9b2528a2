mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn creates_users_with_a_known_role() {
    let app = common::app().await;

    let (status, body) =
        common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=kitchen").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "kitchen");

    let (status, body) =
        common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=kitchen").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User already exists");

    // the same phone may hold another role
    let (status, _) =
        common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=user").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
        common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=chef").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid role specified");

    let (status, body) =
        common::post(&app, "/create_user", "name=Aida&phone=phone&role=user").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["phone"].is_array());

    let (status, body) =
        common::post(&app, "/create_user", "name=Aida&phone=%280312%29+66-00-00&role=user").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["phone"], "(0312) 66-00-00");
}

#[tokio::test]
async fn filters_users_by_role() {
    let app = common::app().await;

    common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=user").await;
    common::post(&app, "/create_user", "name=Bolot&phone=0700111222&role=courier").await;
    common::post(&app, "/create_user", "name=Chynara&phone=0777333444&role=administration").await;

    let (_, body) = common::get(&app, "/users").await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = common::get(&app, "/users?role=").await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = common::get(&app, "/users?role=courier").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Bolot");

    let (status, _) = common::get(&app, "/users?role=chef").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn manages_couriers() {
    let app = common::app().await;

    let (status, body) = common::post(&app, "/add_courier", "name=Bolot&phone=0700111222").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["courier"]["role"], "courier");
    let id = body["courier"]["id"].as_i64().unwrap();

    let (status, body) = common::post(&app, "/add_courier", "name=Bolot&phone=0700111222").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Courier already exists");
    assert_eq!(body["courier"]["id"], id);

    let (status, _) =
        common::post(&app, &format!("/edit_courier/{id}"), "name=Bolot+A.&phone=0700999888").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = common::get(&app, &format!("/edit_courier/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bolot A.");
    assert_eq!(body["phone"], "0700999888");

    let (_, body) = common::get(&app, "/couriers").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = common::post(&app, &format!("/delete_courier/{id}"), "").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, "/couriers").await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = common::post(&app, &format!("/delete_courier/{id}"), "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn courier_routes_ignore_other_roles() {
    let app = common::app().await;

    let (_, body) =
        common::post(&app, "/create_user", "name=Aida&phone=0555123456&role=user").await;
    let id = body["user"]["id"].as_i64().unwrap();

    let (status, body) = common::get(&app, &format!("/edit_courier/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Courier not found");

    let (status, _) =
        common::post(&app, &format!("/edit_courier/{id}"), "name=Aida&phone=0555000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::post(&app, &format!("/delete_courier/{id}"), "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = common::get(&app, "/users").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn courier_phone_numbers_stay_unique() {
    let app = common::app().await;

    common::post(&app, "/add_courier", "name=Bolot&phone=0700111222").await;
    let (_, body) = common::post(&app, "/add_courier", "name=Dastan&phone=0700333444").await;
    let id = body["courier"]["id"].as_i64().unwrap();

    let (status, _) =
        common::post(&app, &format!("/edit_courier/{id}"), "name=Dastan&phone=0700111222").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn manages_branches() {
    let app = common::app().await;

    let (status, body) = common::post(
        &app,
        "/add_branch",
        "branch_name=Downtown&address=Chui+Ave+1&phone=0312660000",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["branch"]["name"], "Downtown");
    let id = body["branch"]["id"].as_i64().unwrap();

    let (status, body) = common::post(
        &app,
        "/add_branch",
        "name=Downtown&address=Elsewhere&phone=0312660001",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Branch already exists");
    assert_eq!(body["branch"]["address"], "Chui Ave 1");

    common::post(&app, "/add_branch", "name=Airport&address=Manas&phone=0312690000").await;

    let (status, _) = common::post(
        &app,
        &format!("/edit_branch/{id}"),
        "name=Airport&address=Chui+Ave+1&phone=0312660000",
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = common::post(
        &app,
        &format!("/edit_branch/{id}"),
        "name=Old+Town&address=Chui+Ave+2&phone=0312660000",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(&app, &format!("/edit_branch/{id}")).await;
    assert_eq!(body["name"], "Old Town");
    assert_eq!(body["address"], "Chui Ave 2");

    let (_, body) = common::get(&app, "/branches").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = common::post(&app, &format!("/delete_branch/{id}"), "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::get(&app, &format!("/edit_branch/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::post(&app, &format!("/delete_branch/{id}"), "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejects_incomplete_branches() {
    let app = common::app().await;

    let (status, _) = common::post(&app, "/add_branch", "name=Downtown&phone=0312660000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        common::post(&app, "/add_branch", "name=Downtown&address=&phone=0312660000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["address"].is_array());

    let (_, body) = common::get(&app, "/branches").await;
    assert!(body.as_array().unwrap().is_empty());
}
