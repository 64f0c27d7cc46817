use sea_orm::EntityTrait;

use super::*;

/// Creates an archived season administered by a fresh user, holding one result.
///
/// Returns the admin's token and the season's result.
async fn archived_season_with_result(
    db: &DatabaseConnection,
    jwt: &JwtService,
) -> (String, entity::result::Model) {
    let admin = factory::create_user(db).await.unwrap();
    let season = factory::season::create_archived_season(db).await.unwrap();
    factory::create_admin(db, admin.id, season.id).await.unwrap();
    let (_, _, _, result) = factory::helpers::create_result_with_dependencies(db, season.id)
        .await
        .unwrap();
    let token = jwt.issue(admin.id).unwrap();

    (token, result)
}

/// Tests an archived season rejects result updates even from its admin.
///
/// Expected: 400 with SeasonArchived, and the stored result is unchanged
#[tokio::test]
async fn archived_season_rejects_result_update() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let (token, result) = archived_season_with_result(db, &jwt).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/result/{}", result.id),
        Some(&token),
        Some(json!({
            "driver_id": result.driver_id,
            "team_id": result.team_id,
            "race_id": result.race_id,
            "result_type": "Finished",
            "position": 1,
            "point": 25.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SeasonArchived");

    let stored = entity::prelude::RaceResult::find_by_id(result.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, result);
}

/// Tests an archived season rejects result deletion even from its admin.
///
/// Expected: 400 with SeasonArchived, and the result still exists
#[tokio::test]
async fn archived_season_rejects_result_delete() {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, jwt) = app(db);

    let (token, result) = archived_season_with_result(db, &jwt).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/result/{}", result.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SeasonArchived");

    let stored = entity::prelude::RaceResult::find_by_id(result.id)
        .one(db)
        .await
        .unwrap();
    assert!(stored.is_some());
}
