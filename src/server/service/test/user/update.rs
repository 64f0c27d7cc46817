use super::*;

/// Tests updating username and email, including keeping one's own values.
///
/// Expected: Ok when unchanged or free, Err(UsernameExists) when taken by another user
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("yuki")
        .email("yuki@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let service = UserService::new(db);

    let unchanged = service
        .update(UpdateUserParams {
            id: user.id,
            username: "yuki".to_string(),
            email: "yuki@example.com".to_string(),
        })
        .await?;
    assert_eq!(unchanged.username, "yuki");

    let renamed = service
        .update(UpdateUserParams {
            id: user.id,
            username: "tsunoda".to_string(),
            email: "Tsunoda@Example.com".to_string(),
        })
        .await?;
    assert_eq!(
        renamed,
        User {
            id: user.id,
            username: "tsunoda".to_string(),
            email: "tsunoda@example.com".to_string(),
        }
    );

    let result = service
        .update(UpdateUserParams {
            id: user.id,
            username: "taken".to_string(),
            email: "tsunoda@example.com".to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::UsernameExists))
    ));

    Ok(())
}
