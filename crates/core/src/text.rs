/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a camelCase identifier before every uppercase letter and lowercases
/// each piece.
///
/// Non-letter characters stay attached to the word they follow, so
/// `doesNotContainC-reate` yields `["does", "not", "contain", "c-reate"]`.
#[must_use]
pub fn camel_case_to_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for character in value.chars() {
        if character.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(character.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
