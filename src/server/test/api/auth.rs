use super::*;

/// Tests the register, login and current user flow.
///
/// Expected: 201 on register, 200 with a token on login, 200 for the current user
#[tokio::test]
async fn register_login_and_fetch_user() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let (app, _) = app(test.db.as_ref().unwrap());

    let (status, user) = send(
        &app,
        Method::POST,
        "/api/user/register",
        None,
        Some(json!({
            "username": "kimi",
            "email": "kimi@example.com",
            "password": "bwoah-1234"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["username"], "kimi");

    let (status, login) = send(
        &app,
        Method::POST,
        "/api/user/login",
        None,
        Some(json!({ "login": "KIMI@example.com", "password": "bwoah-1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap();

    let (status, current) = send(&app, Method::GET, "/api/user", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["id"], user["id"]);
}

/// Tests protected routes without or with a bad token.
///
/// Expected: 401 Unauthorized for both
#[tokio::test]
async fn rejects_missing_and_invalid_token() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let (app, _) = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/season",
        None,
        Some(json!({ "name": "No token" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));

    let (status, _) = send(&app, Method::GET, "/api/user", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests a wrong password on login.
///
/// Expected: 400 with InvalidCredentials
#[tokio::test]
async fn rejects_wrong_password() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _) = app(db);

    factory::user::UserFactory::new(db)
        .username("sebastian")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user/login",
        None,
        Some(json!({ "login": "sebastian", "password": "whatever1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidCredentials");
}
