use super::{dispatch, Context, Outcome};
use chrono::NaiveDate;
use rolodex_core::AddressBook;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn run(book: &mut AddressBook, line: &str) -> Outcome {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap().to_lowercase();
    let args: Vec<&str> = tokens.collect();
    let mut ctx = Context {
        book,
        today: today(),
        upcoming_days: 7,
    };
    dispatch(&mut ctx, &command, &args)
}

fn reply(book: &mut AddressBook, line: &str) -> String {
    run(book, line).message
}

fn seeded() -> AddressBook {
    let mut book = AddressBook::new();
    assert!(run(&mut book, "addcontact anna lee 1112223333").changed);
    assert!(run(&mut book, "addcontact lee park 4445556666").changed);
    book
}

#[test]
fn add_contact_normalizes_name_and_collects_phones() {
    let mut book = AddressBook::new();
    let outcome = run(&mut book, "addcontact jean-paul DUPONT 1112223333 4445556666");
    assert_eq!(outcome, Outcome::changed("Contact added."));
    assert_eq!(
        book.find("jean-paul dupont").unwrap().to_string(),
        "Jean-Paul Dupont: 1112223333; 4445556666"
    );
}

#[test]
fn add_contact_requires_name_and_phone() {
    let mut book = AddressBook::new();
    assert_eq!(
        reply(&mut book, "addcontact anna"),
        "Please enter name and at least one phone number."
    );
    assert_eq!(
        reply(&mut book, "addcontact anna lee"),
        "At least one valid phone number required (10 digits)."
    );
    assert_eq!(reply(&mut book, "addcontact 1112223333 4445556666"), "Name is missing.");
    assert!(book.is_empty());
}

#[test]
fn add_contact_rejects_case_insensitive_duplicates() {
    let mut book = seeded();
    let outcome = run(&mut book, "addcontact ANNA LEE 9998887777");
    assert!(!outcome.changed);
    assert_eq!(outcome.message, "Contact with this name already exists.");
    assert_eq!(book.len(), 2);
}

#[test]
fn add_contact_rejects_bad_or_repeated_phones() {
    let mut book = AddressBook::new();
    assert_eq!(
        reply(&mut book, "addcontact bob 1112223333 12345"),
        "Invalid phone number '12345'. Must contain exactly 10 digits."
    );
    assert_eq!(
        reply(&mut book, "addcontact bob 1112223333 1112223333"),
        "Phone number '1112223333' already exists."
    );
    assert!(book.is_empty());
}

#[test]
fn edit_name_splits_on_existing_contact() {
    let mut book = seeded();
    let outcome = run(&mut book, "editname anna lee anna-maria lee");
    assert_eq!(
        outcome,
        Outcome::changed("Contact name changed to 'Anna-Maria Lee'.")
    );
    assert!(!book.name_exists("Anna Lee"));
    assert!(book.find("anna-maria lee").unwrap().find_phone("1112223333").is_some());
}

#[test]
fn edit_name_reports_missing_contact_and_taken_name() {
    let mut book = seeded();
    assert_eq!(reply(&mut book, "editname bob bobby"), "Contact not found.");
    assert_eq!(
        reply(&mut book, "editname anna lee lee park"),
        "Contact with this name already exists."
    );
    assert_eq!(
        reply(&mut book, "editname anna"),
        "Please provide old and new full names."
    );
}

#[test]
fn remove_contact_ignores_case() {
    let mut book = seeded();
    assert_eq!(
        run(&mut book, "removecontact ANNA lee"),
        Outcome::changed("Contact 'Anna Lee' removed.")
    );
    assert_eq!(reply(&mut book, "removecontact anna lee"), "Contact not found.");
    assert_eq!(
        reply(&mut book, "removecontact"),
        "Please provide the contact name to remove."
    );
}

#[test]
fn phone_commands_update_record() {
    let mut book = seeded();
    assert_eq!(
        run(&mut book, "addphone anna lee 7778889999"),
        Outcome::changed("Phone number added.")
    );
    assert_eq!(
        reply(&mut book, "addphone anna lee 7778889999"),
        "Phone number '7778889999' already exists for this contact."
    );
    assert_eq!(
        run(&mut book, "changephone anna lee 1112223333 2223334444"),
        Outcome::changed("Phone number updated.")
    );
    assert_eq!(
        run(&mut book, "removephone anna lee 7778889999"),
        Outcome::changed("Phone number removed.")
    );
    assert_eq!(
        book.find("Anna Lee").unwrap().to_string(),
        "Anna Lee: 2223334444"
    );
}

#[test]
fn phone_commands_validate_arguments() {
    let mut book = seeded();
    assert_eq!(
        reply(&mut book, "addphone anna lee 12"),
        "Please provide a valid phone number (10 digits)."
    );
    assert_eq!(
        reply(&mut book, "addphone 1112223333"),
        "Please provide name and phone number to add."
    );
    assert_eq!(
        reply(&mut book, "changephone anna lee 12 2223334444"),
        "Old phone number must be 10 digits."
    );
    assert_eq!(
        reply(&mut book, "changephone anna lee 1112223333 22"),
        "New phone number must be 10 digits."
    );
    assert_eq!(
        reply(&mut book, "changephone 1112223333 2223334444"),
        "Please provide full name, old phone, and new phone."
    );
    assert_eq!(
        reply(&mut book, "changephone anna lee 9999999999 2223334444"),
        "Old phone number '9999999999' not found."
    );
    assert_eq!(
        reply(&mut book, "removephone anna lee 9999999999"),
        "Phone number '9999999999' not found for this contact."
    );
    assert_eq!(
        reply(&mut book, "addphone carl 9999999999"),
        "Contact not found."
    );
}

#[test]
fn change_phone_refuses_duplicate_number() {
    let mut book = seeded();
    run(&mut book, "addphone anna lee 7778889999");
    assert_eq!(
        reply(&mut book, "changephone anna lee 1112223333 7778889999"),
        "Phone number '7778889999' already exists for this contact."
    );
    assert_eq!(book.find("anna lee").unwrap().phones().len(), 2);
}

#[test]
fn show_phone_resolves_partial_names() {
    let mut book = seeded();
    assert_eq!(reply(&mut book, "showphone park"), "Lee Park: 4445556666");
    assert_eq!(
        reply(&mut book, "showphone lee"),
        "Found multiple contacts:\nAnna Lee: 1112223333\nLee Park: 4445556666"
    );
    assert_eq!(reply(&mut book, "showphone zed"), "Contact not found.");
}

#[test]
fn show_phone_lists_every_contact_containing_query() {
    let mut book = AddressBook::new();
    run(&mut book, "addcontact anna 1112223333");
    run(&mut book, "addcontact anna lee 4445556666");
    assert_eq!(
        reply(&mut book, "showphone ANNA"),
        "Found multiple contacts:\nAnna: 1112223333\nAnna Lee: 4445556666"
    );
    assert_eq!(reply(&mut book, "showphone anna lee"), "Anna Lee: 4445556666");
}

#[test]
fn show_birthday_lists_every_contact_containing_query() {
    let mut book = AddressBook::new();
    run(&mut book, "addcontact anna 1112223333");
    run(&mut book, "addcontact anna lee 4445556666");
    run(&mut book, "addbday anna 01.02.1990");
    run(&mut book, "addbday anna lee 03.04.1985");
    assert_eq!(
        reply(&mut book, "showbday anna"),
        "Found multiple contacts:\nAnna: 01.02.1990\nAnna Lee: 03.04.1985\nPlease enter the full name to get an exact match."
    );
}

#[test]
fn birthday_commands_follow_add_edit_contract() {
    let mut book = seeded();
    assert_eq!(
        run(&mut book, "addbday anna lee 15.06.1990"),
        Outcome::changed("Birthday added.")
    );
    assert_eq!(
        reply(&mut book, "addbday anna lee 16.06.1990"),
        "Birthday already exists. Use 'editbday' to change it."
    );
    assert_eq!(
        run(&mut book, "editbday anna lee 16.06.1990"),
        Outcome::changed("Birthday updated.")
    );
    assert_eq!(
        reply(&mut book, "showbday anna lee"),
        "Anna Lee's birthday is 16.06.1990"
    );
    assert_eq!(
        run(&mut book, "removebday anna lee"),
        Outcome::changed("Birthday removed.")
    );
    assert_eq!(
        run(&mut book, "removebday anna lee"),
        Outcome::unchanged("Birthday removed.")
    );
    assert_eq!(
        reply(&mut book, "showbday anna lee"),
        "Birthday is not set for this contact."
    );
}

#[test]
fn birthday_commands_report_validation_errors() {
    let mut book = seeded();
    assert_eq!(
        reply(&mut book, "addbday anna lee 1990-06-15"),
        "Invalid date format. Use DD.MM.YYYY"
    );
    assert_eq!(
        reply(&mut book, "addbday anna lee 11.06.2024"),
        "Birthday cannot be in the future."
    );
    assert_eq!(
        reply(&mut book, "editbday bob 01.01.2000"),
        "Contact not found."
    );
    assert_eq!(
        reply(&mut book, "addbday anna"),
        "Please provide name and birthday (DD.MM.YYYY)."
    );
    assert!(book.find("anna lee").unwrap().birthday().is_none());
}

#[test]
fn show_birthday_lists_ambiguous_matches() {
    let mut book = seeded();
    assert_eq!(
        reply(&mut book, "showbday lee"),
        "None of the matching contacts have a birthday set."
    );
    run(&mut book, "addbday lee park 01.02.1980");
    assert_eq!(
        reply(&mut book, "showbday lee"),
        "Found multiple contacts:\nLee Park: 01.02.1980\nPlease enter the full name to get an exact match."
    );
}

#[test]
fn upcoming_birthdays_use_window() {
    let mut book = seeded();
    assert_eq!(
        reply(&mut book, "birthdays"),
        "No upcoming birthdays in the next 7 days."
    );
    run(&mut book, "addbday anna lee 15.06.1990");
    run(&mut book, "addbday lee park 20.06.1990");
    assert_eq!(reply(&mut book, "birthdays"), "Anna Lee: 17.06.2024");
}

#[test]
fn search_and_all_render_records() {
    let mut book = seeded();
    assert_eq!(reply(&mut book, "search lee"), "Lee Park: 4445556666");
    assert_eq!(reply(&mut book, "search 222"), "Anna Lee: 1112223333");
    assert_eq!(reply(&mut book, "search anna lee"), "Anna Lee: 1112223333");
    assert_eq!(reply(&mut book, "search 111 zzz"), "Anna Lee: 1112223333");
    assert_eq!(reply(&mut book, "search zzz 111"), "No matching contacts found.");
    assert_eq!(reply(&mut book, "search zed"), "No matching contacts found.");
    assert_eq!(
        reply(&mut book, "search"),
        "Please enter a name or phone to search."
    );

    run(&mut book, "addcontact bob 7778889999");
    assert_eq!(
        reply(&mut book, "all"),
        "Anna Lee: 1112223333\nBob: 7778889999\nLee Park: 4445556666"
    );
    assert_eq!(reply(&mut AddressBook::new(), "all"), "No contacts saved.");
}

#[test]
fn general_and_unknown_commands() {
    let mut book = AddressBook::new();
    assert_eq!(reply(&mut book, "hello"), "How can I help you?");
    let unknown = run(&mut book, "frobnicate");
    assert!(!unknown.changed);
    assert!(unknown
        .message
        .starts_with("Unknown command. Try one of the following:"));
    assert!(unknown.message.contains("Birthdays: addbday"));
    assert!(reply(&mut book, "help").contains("Phones: addphone, changephone"));
}
