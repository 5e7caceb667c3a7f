//! Base username derivation.

use crate::tone::normalize;

/// Build a base username from an already normalized name.
///
/// The last token is the given name and is kept whole; every earlier token
/// contributes its first character, left to right. `pham thanh tung` becomes
/// `tungpt`. A name with no tokens yields an empty string.
#[must_use]
pub fn format_username(normalized: &str) -> String {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let Some((given, rest)) = tokens.split_last() else {
        return String::new();
    };

    let mut username = String::with_capacity(given.len() + rest.len());
    username.push_str(given);
    username.extend(rest.iter().filter_map(|token| token.chars().next()));
    username
}

/// Normalize a raw full name and derive its base username.
#[must_use]
pub fn convert_name_to_username(full_name: &str) -> String {
    format_username(&normalize(full_name))
}
