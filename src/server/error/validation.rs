use thiserror::Error;

/// Business rule violations surfaced to the client as 400 Bad Request.
///
/// The `Display` output of each variant is the stable message key returned in the
/// response body, so the client can look up its own localized text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("NameRequired")]
    NameRequired,
    #[error("SeasonArchived")]
    SeasonArchived,

    #[error("TeamNameExists")]
    TeamNameExists,
    #[error("InvalidColor")]
    InvalidColor,

    #[error("DriverNameExists")]
    DriverNameExists,
    #[error("DriverNumberExists")]
    DriverNumberExists,
    #[error("InvalidDriverNumber")]
    InvalidDriverNumber,
    #[error("InvalidNationality")]
    InvalidNationality,
    /// Driver's current team belongs to another season.
    #[error("TeamNotInSeason")]
    TeamNotInSeason,

    #[error("RaceNameExists")]
    RaceNameExists,

    /// Driver, team and race of a result are not all in the targeted season.
    #[error("SeasonMismatch")]
    SeasonMismatch,
    #[error("ResultExists")]
    ResultExists,
    #[error("InvalidPosition")]
    InvalidPosition,
    #[error("InvalidPoint")]
    InvalidPoint,

    #[error("PermissionExists")]
    PermissionExists,
    #[error("AlreadyAdmin")]
    AlreadyAdmin,
    #[error("AdminCannotBeRemoved")]
    AdminCannotBeRemoved,

    #[error("FavoriteExists")]
    FavoriteExists,

    #[error("UsernameExists")]
    UsernameExists,
    #[error("EmailExists")]
    EmailExists,
    #[error("InvalidUsername")]
    InvalidUsername,
    #[error("InvalidEmail")]
    InvalidEmail,
    #[error("PasswordTooShort")]
    PasswordTooShort,
    #[error("IncorrectPassword")]
    IncorrectPassword,
}
