use super::*;

/// Tests registering trims the username and lower cases the email.
///
/// Expected: Ok with normalized fields and a usable password hash
#[tokio::test]
async fn registers_with_normalized_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new("secret", 1);

    let service = AuthService::new(db, &jwt);
    let user = service
        .register(params("  lando ", "Lando@Example.com", "password123"))
        .await?;

    assert_eq!(user.username, "lando");
    assert_eq!(user.email, "lando@example.com");

    let token = service.login("lando", "password123").await?;
    assert_eq!(token.user.id, user.id);

    Ok(())
}

/// Tests registering with a taken username or email.
///
/// Expected: Err(UsernameExists) and Err(EmailExists)
#[tokio::test]
async fn rejects_taken_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new("secret", 1);

    factory::user::UserFactory::new(db)
        .username("oscar")
        .email("oscar@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);

    let result = service
        .register(params("oscar", "new@example.com", "password123"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::UsernameExists))
    ));

    let result = service
        .register(params("piastri", "OSCAR@example.com", "password123"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::EmailExists))
    ));

    Ok(())
}

/// Tests registering with a short password.
///
/// Expected: Err(PasswordTooShort)
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new("secret", 1);

    let service = AuthService::new(db, &jwt);
    let result = service
        .register(params("george", "george@example.com", "short"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PasswordTooShort))
    ));

    Ok(())
}

/// Tests two concurrent registrations with the same email.
///
/// Expected: one Ok and one Err(EmailExists)
#[tokio::test]
async fn concurrent_duplicate_email_is_validation_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new("secret", 1);

    let service = AuthService::new(db, &jwt);
    let (first, second) = tokio::join!(
        service.register(params("oscar", "racer@example.com", "password123")),
        service.register(params("logan", "racer@example.com", "password123")),
    );

    let rejected = match (first, second) {
        (Ok(_), Err(err)) | (Err(err), Ok(_)) => err,
        (first, second) => panic!("expected one success, got {first:?} and {second:?}"),
    };
    assert!(matches!(
        rejected,
        AppError::ValidationErr(ValidationError::EmailExists)
    ));

    Ok(())
}
