use super::*;
use crate::server::util::password::verify_password;
use sea_orm::EntityTrait;

/// Tests changing the password requires the current one.
///
/// Expected: Err(IncorrectPassword) with a wrong current password, Ok otherwise
/// with the new password stored
#[tokio::test]
async fn requires_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash(hash_password("old-password"))
        .build()
        .await?;

    let service = UserService::new(db);

    let result = service
        .change_password(user.id, "not-the-password", "new-password")
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::IncorrectPassword))
    ));

    let result = service
        .change_password(user.id, "old-password", "short")
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PasswordTooShort))
    ));

    service
        .change_password(user.id, "old-password", "new-password")
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(verify_password("new-password", &stored.password_hash));
    assert!(!verify_password("old-password", &stored.password_hash));

    Ok(())
}
