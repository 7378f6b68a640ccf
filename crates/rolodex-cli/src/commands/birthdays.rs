use crate::commands::contacts::candidates;
use crate::commands::{CommandResult, Context, Outcome};
use crate::error::{invalid_input, not_found};
use crate::util::name_from;

pub fn add_birthday(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let (name_parts, date) = match args.split_last() {
        Some((date, name_parts)) if !name_parts.is_empty() => (name_parts, *date),
        _ => {
            return Err(invalid_input(
                "Please provide name and birthday (DD.MM.YYYY).",
            ))
        }
    };

    let name = name_from(name_parts);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    if record.birthday().is_some() {
        return Err(invalid_input(
            "Birthday already exists. Use 'editbday' to change it.",
        ));
    }
    record.add_birthday(date, ctx.today)?;
    Ok(Outcome::changed("Birthday added."))
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(invalid_input("Please provide the contact name."));
    }

    let name = name_from(args);
    let matches = candidates(ctx.book, &name)?;
    if let [record] = matches.as_slice() {
        return Ok(Outcome::unchanged(match record.birthday() {
            Some(birthday) => format!("{}'s birthday is {}", record.name(), birthday),
            None => "Birthday is not set for this contact.".to_string(),
        }));
    }

    let with_birthday: Vec<String> = matches
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();
    if with_birthday.is_empty() {
        return Ok(Outcome::unchanged(
            "None of the matching contacts have a birthday set.",
        ));
    }

    let mut lines = vec!["Found multiple contacts:".to_string()];
    lines.extend(with_birthday);
    lines.push("Please enter the full name to get an exact match.".to_string());
    Ok(Outcome::unchanged(lines.join("\n")))
}

pub fn edit_birthday(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let (name_parts, date) = match args.split_last() {
        Some((date, name_parts)) if !name_parts.is_empty() => (name_parts, *date),
        _ => {
            return Err(invalid_input(
                "Please provide name and new birthday (DD.MM.YYYY).",
            ))
        }
    };

    let name = name_from(name_parts);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    record.edit_birthday(date, ctx.today)?;
    Ok(Outcome::changed("Birthday updated."))
}

pub fn remove_birthday(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(invalid_input("Please provide name to remove birthday."));
    }

    let name = name_from(args);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    let had_birthday = record.birthday().is_some();
    record.remove_birthday();
    Ok(Outcome {
        message: "Birthday removed.".to_string(),
        changed: had_birthday,
    })
}

pub fn upcoming(ctx: &mut Context<'_>) -> CommandResult {
    let upcoming = ctx.book.upcoming_birthdays(ctx.today, ctx.upcoming_days);
    if upcoming.is_empty() {
        return Ok(Outcome::unchanged(format!(
            "No upcoming birthdays in the next {} days.",
            ctx.upcoming_days
        )));
    }
    Ok(Outcome::unchanged(upcoming.join("\n")))
}
