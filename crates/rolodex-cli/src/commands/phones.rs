use crate::commands::contacts::candidates;
use crate::commands::{CommandResult, Context, Outcome};
use crate::error::{invalid_input, not_found, validation};
use crate::util::name_from;
use rolodex_core::domain::looks_like_phone;

pub fn add_phone(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let (name_parts, phone) = match args.split_last() {
        Some((phone, name_parts)) if !name_parts.is_empty() => (name_parts, *phone),
        _ => return Err(invalid_input("Please provide name and phone number to add.")),
    };
    if !looks_like_phone(phone) {
        return Err(validation("Please provide a valid phone number (10 digits)."));
    }

    let name = name_from(name_parts);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    if !record.add_phone(phone) {
        return Err(invalid_input(format!(
            "Phone number '{}' already exists for this contact.",
            phone
        )));
    }
    Ok(Outcome::changed("Phone number added."))
}

/// `changephone <name...> <old> <new>`.
pub fn change_phone(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(invalid_input(
            "Please provide full name, old phone, and new phone.",
        ));
    }

    let (name_parts, phones) = args.split_at(args.len() - 2);
    let (old_phone, new_phone) = (phones[0], phones[1]);
    if !looks_like_phone(old_phone) {
        return Err(validation("Old phone number must be 10 digits."));
    }
    if !looks_like_phone(new_phone) {
        return Err(validation("New phone number must be 10 digits."));
    }

    let name = name_from(name_parts);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    if record.find_phone(old_phone).is_none() {
        return Err(invalid_input(format!(
            "Old phone number '{}' not found.",
            old_phone
        )));
    }
    if !record.edit_phone(old_phone, new_phone) {
        return Err(invalid_input(format!(
            "Phone number '{}' already exists for this contact.",
            new_phone
        )));
    }
    Ok(Outcome::changed("Phone number updated."))
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let (name_parts, phone) = match args.split_last() {
        Some((phone, name_parts)) if !name_parts.is_empty() => (name_parts, *phone),
        _ => {
            return Err(invalid_input(
                "Please provide full name and phone number to remove.",
            ))
        }
    };
    if !looks_like_phone(phone) {
        return Err(validation("Please provide a valid phone number (10 digits)."));
    }

    let name = name_from(name_parts);
    let record = ctx.book.find_mut(&name).ok_or_else(|| not_found(&name))?;
    if !record.remove_phone(phone) {
        return Err(invalid_input(format!(
            "Phone number '{}' not found for this contact.",
            phone
        )));
    }
    Ok(Outcome::changed("Phone number removed."))
}

pub fn show_phone(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(invalid_input("Please provide the contact name."));
    }

    let name = name_from(args);
    let matches = candidates(ctx.book, &name)?;
    if let [record] = matches.as_slice() {
        return Ok(Outcome::unchanged(record.to_string()));
    }

    let mut lines = vec!["Found multiple contacts:".to_string()];
    lines.extend(matches.iter().map(ToString::to_string));
    Ok(Outcome::unchanged(lines.join("\n")))
}
