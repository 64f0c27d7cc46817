use super::*;

/// Tests a duplicate driver number in the same season.
///
/// Expected: 201 for the season and first driver, 400 with DriverNumberExists
/// for the second driver
#[tokio::test]
async fn duplicate_number_is_rejected() {
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
        Some(json!({ "name": "Grand Prix 2025", "description": "Main series" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let drivers = format!("/api/season/{}/driver", season["id"]);

    let (status, driver) = send(
        &app,
        Method::POST,
        &drivers,
        Some(&token),
        Some(json!({ "name": "Alex", "number": 23, "nationality": "th" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(driver["nationality"], "TH");

    let (status, body) = send(
        &app,
        Method::POST,
        &drivers,
        Some(&token),
        Some(json!({ "name": "Logan", "number": 23 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "DriverNumberExists" }));
}

/// Tests driver statistics are public and 404 for unknown names.
///
/// Expected: 200 for an existing name, 404 with DriverNotFound otherwise
#[tokio::test]
async fn statistics_by_name() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _) = app(db);

    let season = factory::create_season(db).await.unwrap();
    factory::driver::DriverFactory::new(db, season.id)
        .name("Pierre")
        .build()
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/api/driver/statistics/Pierre", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pierre");
    assert_eq!(body["total_races"], 0);

    let (status, body) = send(&app, Method::GET, "/api/driver/statistics/Nobody", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "DriverNotFound");
}

/// Tests an archived season rejects new drivers even from its admin.
///
/// Expected: 400 with SeasonArchived
#[tokio::test]
async fn archived_season_rejects_driver() {
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
        &format!("/api/season/{}/driver", season.id),
        Some(&token),
        Some(json!({ "name": "Oliver", "number": 87 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SeasonArchived");
}
