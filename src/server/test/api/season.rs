use super::*;

/// Tests creating a season and reading it back.
///
/// Expected: 201 with the season, 200 on fetch, creator listed as Admin
#[tokio::test]
async fn creates_season_with_admin_permission() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let user = factory::create_user(db).await.unwrap();
    let token = jwt.issue(user.id).unwrap();

    let (status, season) = send(
        &app,
        Method::POST,
        "/api/season",
        Some(&token),
        Some(json!({ "name": "Spring Cup" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(season["name"], "Spring Cup");
    assert_eq!(season["description"], "");
    assert_eq!(season["is_archived"], false);

    let id = season["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/season/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], season["id"]);

    let (status, permissions) = send(
        &app,
        Method::GET,
        &format!("/api/season/{}/permission", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(permissions[0]["user_id"], user.id);
    assert_eq!(permissions[0]["permission_type"], "Admin");
}

/// Tests fetching a season that does not exist.
///
/// Expected: 404 with SeasonNotFound
#[tokio::test]
async fn missing_season_is_not_found() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let (app, _) = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, Method::GET, "/api/season/42", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "SeasonNotFound" }));
}

/// Tests only the admin may archive or delete a season.
///
/// Expected: 403 for the moderator, 200 then 204 for the admin
#[tokio::test]
async fn archive_and_delete_require_admin() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let (admin, season) = factory::helpers::create_season_with_admin(db).await.unwrap();
    let moderator = factory::create_user(db).await.unwrap();
    factory::create_moderator(db, moderator.id, season.id)
        .await
        .unwrap();

    let admin_token = jwt.issue(admin.id).unwrap();
    let moderator_token = jwt.issue(moderator.id).unwrap();

    let archive = format!("/api/season/{}/archive", season.id);
    let (status, _) = send(&app, Method::PUT, &archive, Some(&moderator_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::PUT, &archive, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_archived"], true);

    let path = format!("/api/season/{}", season.id);
    let (status, _) = send(&app, Method::DELETE, &path, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &path, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
