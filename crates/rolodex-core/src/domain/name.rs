/// Canonical display form of a contact name: words separated by single
/// spaces, each hyphen-separated part capitalized.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(normalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lookup key for a name. Lookups compare keys, never display names.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn normalize_word(word: &str) -> String {
    word.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(part.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|ch| ch.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
