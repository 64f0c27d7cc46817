use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{AuthToken, CreateUserParams, RegisterUserParams, User},
    service::user::account_conflict,
    util::{
        jwt::JwtService,
        normalize,
        password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `params` - Raw username, email and password from the request
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::ValidationErr)` - `InvalidUsername`, `InvalidEmail`,
    ///   `PasswordTooShort`, `UsernameExists` or `EmailExists`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let username = normalize::username(&params.username)?;
        let email = normalize::email(&params.email)?;
        let password = normalize::password(&params.password)?;

        if repo.username_exists(&username, None).await? {
            return Err(ValidationError::UsernameExists.into());
        }
        if repo.email_exists(&email, None).await? {
            return Err(ValidationError::EmailExists.into());
        }

        let user = repo
            .create(CreateUserParams {
                username,
                email,
                password_hash: hash_password(password),
            })
            .await
            .map_err(|err| AppError::unique_violation(err, account_conflict))?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Logs in by username or email and issues a bearer token.
    ///
    /// Unknown logins and wrong passwords fail the same way.
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthToken, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_login(login.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(credentials.user.id)?;

        Ok(AuthToken {
            token,
            user: credentials.user,
        })
    }
}
