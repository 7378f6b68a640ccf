use crate::error::CommandError;
use chrono::NaiveDate;
use rolodex_core::AddressBook;
use tracing::debug;

pub mod birthdays;
pub mod contacts;
pub mod phones;

#[cfg(test)]
mod tests;

const COMMAND_GROUPS: [(&str, &[&str]); 4] = [
    ("General", &["hello", "help", "exit", "close"]),
    (
        "Contacts",
        &["addcontact", "editname", "removecontact", "search", "all"],
    ),
    (
        "Phones",
        &["addphone", "changephone", "removephone", "showphone"],
    ),
    (
        "Birthdays",
        &["addbday", "showbday", "editbday", "removebday", "birthdays"],
    ),
];

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub upcoming_days: i64,
}

/// Reply to one command and whether the book needs saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub changed: bool,
}

impl Outcome {
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}

pub type CommandResult = Result<Outcome, CommandError>;

/// Runs every command except `exit`/`close`, which the session owns.
/// Handler errors become plain replies here and never go further.
pub fn dispatch(ctx: &mut Context<'_>, command: &str, args: &[&str]) -> Outcome {
    let result = match command {
        "hello" => Ok(Outcome::unchanged("How can I help you?")),
        "help" => Ok(Outcome::unchanged(command_groups())),
        "addcontact" => contacts::add_contact(ctx, args),
        "editname" => contacts::edit_name(ctx, args),
        "removecontact" => contacts::remove_contact(ctx, args),
        "search" => contacts::search(ctx, args),
        "all" => contacts::show_all(ctx),
        "addphone" => phones::add_phone(ctx, args),
        "changephone" => phones::change_phone(ctx, args),
        "removephone" => phones::remove_phone(ctx, args),
        "showphone" => phones::show_phone(ctx, args),
        "addbday" => birthdays::add_birthday(ctx, args),
        "showbday" => birthdays::show_birthday(ctx, args),
        "editbday" => birthdays::edit_birthday(ctx, args),
        "removebday" => birthdays::remove_birthday(ctx, args),
        "birthdays" => birthdays::upcoming(ctx),
        _ => Ok(Outcome::unchanged(format!(
            "Unknown command. Try one of the following:\n\n{}",
            command_groups()
        ))),
    };

    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!(command, kind = ?err.kind(), "command rejected");
            Outcome::unchanged(err.to_string())
        }
    }
}

pub fn command_groups() -> String {
    COMMAND_GROUPS
        .iter()
        .map(|(group, commands)| format!("   {}: {}", group, commands.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
