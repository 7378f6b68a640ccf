use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::CoreError;
use rolodex_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Failures a command handler can report. Rendering one with `Display`
/// yields the reply shown to the user.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("Contact not found.")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    NotFound,
    InvalidInput,
    Validation,
}

impl CommandError {
    pub fn kind(&self) -> CommandErrorKind {
        match self {
            CommandError::NotFound(_) => CommandErrorKind::NotFound,
            CommandError::InvalidInput(_) => CommandErrorKind::InvalidInput,
            CommandError::Validation(_) => CommandErrorKind::Validation,
        }
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ContactNotFound(name) => CommandError::NotFound(name),
            CoreError::DuplicateName(_) => CommandError::InvalidInput(err.to_string()),
            CoreError::InvalidPhone(_)
            | CoreError::InvalidDateFormat(_)
            | CoreError::BirthdayInFuture(_)
            | CoreError::InvalidWindowDays(_) => CommandError::Validation(err.to_string()),
        }
    }
}

pub fn invalid_input(message: impl Into<String>) -> CommandError {
    CommandError::InvalidInput(message.into())
}

pub fn not_found(name: impl Into<String>) -> CommandError {
    CommandError::NotFound(name.into())
}

pub fn validation(message: impl Into<String>) -> CommandError {
    CommandError::Validation(message.into())
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath | StoreErrorKind::Core => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::CorruptSnapshot
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidUpcomingDays(_)
        | ConfigError::InvalidDbPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
