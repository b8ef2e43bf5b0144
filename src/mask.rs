//! Hide sensitive strings before displaying them.
//!
//! Lengths are counted in `char`s, so a masked string keeps the visual length
//! of the original one.

const MASK: char = '*';

/// Replace every character with `*`.
///
/// ```rust
/// assert_eq!(stdkit::mask::mask("Secret-codE"), "***********");
/// ```
pub fn mask(s: &str) -> String {
    s.chars().map(|_| MASK).collect()
}

/// Replace every character but the first one with `*`.
///
/// ```rust
/// assert_eq!(stdkit::mask::mask_not_first("Secret-codE"), "S**********");
/// ```
pub fn mask_not_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(first).chain(chars.map(|_| MASK)).collect(),
        None => String::new(),
    }
}

/// Replace every character but the first and the last ones with `*`.
///
/// Strings of two characters or less are returned as is.
pub fn mask_not_first_last(s: &str) -> String {
    let count = s.chars().count();
    if count <= 2 {
        return s.to_owned();
    }

    s.chars()
        .enumerate()
        .map(|(i, c)| if i == 0 || i == count - 1 { c } else { MASK })
        .collect()
}
