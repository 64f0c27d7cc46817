use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
/// Ten years.
const MAX_JWT_EXPIRATION_HOURS: i64 = 87_600;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: match std::env::var("JWT_EXPIRATION_HOURS") {
                Ok(value) => parse_hours(&value)?,
                Err(_) => DEFAULT_JWT_EXPIRATION_HOURS,
            },
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_hours(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) => Ok(hours),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRATION_HOURS".to_string(),
            value: value.to_string(),
        }),
    }
}
