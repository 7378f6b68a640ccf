use crate::commands::{CommandResult, Context, Outcome};
use crate::error::{invalid_input, not_found, validation, CommandError};
use crate::util::name_from;
use rolodex_core::domain::{looks_like_phone, validate_phone, ContactRecord};
use rolodex_core::AddressBook;

/// `addcontact <name...> <phone...>`: the first ten-digit token starts the
/// phone list.
pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(invalid_input(
            "Please enter name and at least one phone number.",
        ));
    }

    let phone_start = args
        .iter()
        .position(|arg| looks_like_phone(arg))
        .ok_or_else(|| invalid_input("At least one valid phone number required (10 digits)."))?;
    let (name_parts, phones) = args.split_at(phone_start);
    if name_parts.is_empty() {
        return Err(invalid_input("Name is missing."));
    }

    let name = name_from(name_parts);
    if ctx.book.name_exists(&name) {
        return Err(invalid_input("Contact with this name already exists."));
    }

    let mut record = ContactRecord::new(name);
    for phone in phones {
        if validate_phone(phone).is_err() {
            return Err(validation(format!(
                "Invalid phone number '{}'. Must contain exactly 10 digits.",
                phone
            )));
        }
        if !record.add_phone(phone) {
            return Err(invalid_input(format!(
                "Phone number '{}' already exists.",
                phone
            )));
        }
    }

    ctx.book.add_record(record);
    Ok(Outcome::changed("Contact added."))
}

/// `editname <old...> <new...>`: the shortest leading run of tokens naming an
/// existing contact is the old name.
pub fn edit_name(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(invalid_input("Please provide old and new full names."));
    }

    let (old_name, new_name) = (1..args.len())
        .find_map(|split| {
            let old_name = name_from(&args[..split]);
            ctx.book
                .name_exists(&old_name)
                .then(|| (old_name, name_from(&args[split..])))
        })
        .ok_or_else(|| not_found(args.join(" ")))?;

    ctx.book.rename(&old_name, &new_name)?;
    Ok(Outcome::changed(format!(
        "Contact name changed to '{}'.",
        new_name
    )))
}

pub fn remove_contact(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(invalid_input("Please provide the contact name to remove."));
    }

    let name = name_from(args);
    if !ctx.book.delete(&name) {
        return Err(not_found(name));
    }
    Ok(Outcome::changed(format!("Contact '{}' removed.", name)))
}

/// `search <query> [ignored...]`: only the first token is matched.
pub fn search(ctx: &mut Context<'_>, args: &[&str]) -> CommandResult {
    let Some(query) = args.first() else {
        return Err(invalid_input("Please enter a name or phone to search."));
    };

    let results = ctx.book.search(query);
    if results.is_empty() {
        return Ok(Outcome::unchanged("No matching contacts found."));
    }
    Ok(Outcome::unchanged(results.join("\n")))
}

pub fn show_all(ctx: &mut Context<'_>) -> CommandResult {
    if ctx.book.is_empty() {
        return Ok(Outcome::unchanged("No contacts saved."));
    }

    let lines: Vec<String> = ctx
        .book
        .sorted()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    Ok(Outcome::unchanged(lines.join("\n")))
}

/// Every contact whose name contains `name`, ignoring case.
pub fn candidates<'b>(
    book: &'b AddressBook,
    name: &str,
) -> Result<Vec<&'b ContactRecord>, CommandError> {
    let matches = book.matching(name);
    if matches.is_empty() {
        return Err(not_found(name));
    }
    Ok(matches)
}
