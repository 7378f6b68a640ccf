use chrono::{Local, NaiveDate};
use rolodex_core::domain::normalize_name;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Splits a line into a lowercase command keyword and its arguments.
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

pub fn name_from(tokens: &[&str]) -> String {
    normalize_name(&tokens.join(" "))
}
