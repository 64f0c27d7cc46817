use super::*;

/// Tests a user without a role on the season cannot add teams.
///
/// Expected: 403 Forbidden
#[tokio::test]
async fn stranger_cannot_create_team() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let (_, season) = factory::helpers::create_season_with_admin(db).await.unwrap();
    let stranger = factory::create_user(db).await.unwrap();
    let token = jwt.issue(stranger.id).unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/season/{}/team", season.id),
        Some(&token),
        Some(json!({ "name": "Intruders", "color": "#000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
}

/// Tests an archived season rejects new teams even from its admin.
///
/// Expected: 400 with SeasonArchived
#[tokio::test]
async fn archived_season_rejects_team() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let admin = factory::create_user(db).await.unwrap();
    let season = factory::season::create_archived_season(db).await.unwrap();
    factory::create_admin(db, admin.id, season.id).await.unwrap();
    let token = jwt.issue(admin.id).unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/season/{}/team", season.id),
        Some(&token),
        Some(json!({ "name": "Late Entry", "color": "#123456" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SeasonArchived");
}

/// Tests deleting a team clears its drivers' current team.
///
/// Expected: 204, then the driver's actual_team_id is null
#[tokio::test]
async fn deleting_team_detaches_drivers() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let (admin, season) = factory::helpers::create_season_with_admin(db).await.unwrap();
    let (team, driver, _, _) = factory::helpers::create_result_with_dependencies(db, season.id)
        .await
        .unwrap();
    let token = jwt.issue(admin.id).unwrap();

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/team/{}", team.id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/driver/{}", driver.id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actual_team_id"], Value::Null);

    let (_, results) = send(
        &app,
        Method::GET,
        &format!("/api/season/{}/result", season.id),
        None,
        None,
    )
    .await;
    assert_eq!(results, json!([]));
}
