use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),
    #[error("Birthday cannot be in the future.")]
    BirthdayInFuture(String),
    #[error("invalid upcoming window days: {0}")]
    InvalidWindowDays(i64),
    #[error("Contact not found.")]
    ContactNotFound(String),
    #[error("Contact with this name already exists.")]
    DuplicateName(String),
}
