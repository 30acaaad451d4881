use thiserror::Error;

/// Rejection of a single interactively entered field. The caller re-prompts
/// the same field until parsing succeeds; these never propagate further.
#[derive(Error, Debug, PartialEq)]
pub enum FieldError {
    #[error("`{0}` is not a valid number")]
    NotANumber(String),
    #[error("`{0}` is not a valid integer")]
    NotAnInteger(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
    #[error("region must be one of 'w', 'm', 'c' or 'e'")]
    UnknownRegion(String),
}

/// Failure of the file-import pipeline. Any of these aborts the current
/// import; none of them ends the session.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("`{0}` has already been imported")]
    AlreadyImported(String),
    #[error("`{0}` doesn't match the expected filename format `sales_q*.csv`")]
    FilenameFormat(String),
    #[error("`{0}` doesn't name a region code ('w', 'm', 'c' or 'e') before `.csv`")]
    FilenameRegion(String),
    #[error("no such file or directory: `{0}`")]
    NotFound(String),
    #[error("failed to read `{filename}`")]
    Io {
        filename: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bad data in row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}
