//! Node name and directory token validation
//!
//! A directory token carries exactly one slash character (`/` or `\`) at
//! either end: `src/`, `/src`, `src\` and `\src` all name the directory `src`.
//! Anything else containing a slash is rejected, since one line may only open
//! one directory level.

use super::error::NameError;

/// Tokens of this many characters or more are rejected outright.
pub const MAX_NAME_LENGTH: usize = 100;

const SLASH_CHARS: [char; 2] = ['/', '\\'];

/// Whether the argument is non-empty once surrounding whitespace is removed.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Determine which slash character a string uses.
///
/// Returns `Ok(None)` when it contains neither, and
/// `Err(NameError::MixedSeparators)` when it contains both.
pub fn slash_char(s: &str) -> Result<Option<char>, NameError> {
    let mut slash = None;
    if s.contains('/') {
        slash = Some('/');
    }
    if s.contains('\\') {
        if slash.is_some() {
            return Err(NameError::MixedSeparators);
        }
        slash = Some('\\');
    }
    Ok(slash)
}

/// Classify a node token as file or directory and return its bare name.
///
/// Returns `(is_directory, name)`.
pub fn classify_token(raw: &str) -> Result<(bool, &str), NameError> {
    let length = raw.chars().count();
    if length >= MAX_NAME_LENGTH {
        return Err(NameError::TooLong(length));
    }
    let Some(slash) = slash_char(raw)? else {
        return if is_valid_name(raw) {
            Ok((false, raw))
        } else {
            Err(NameError::Empty)
        };
    };
    if raw.matches(slash).count() != 1 {
        return Err(NameError::MultiSegment);
    }
    let name = if let Some(name) = raw.strip_suffix(slash) {
        name
    } else if let Some(name) = raw.strip_prefix(slash) {
        name
    } else {
        return Err(NameError::MultiSegment);
    };
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameError::Reserved(name.to_string()));
    }
    Ok((true, name))
}

/// Whether a trailing data label is well formed.
///
/// Labels are 1 to 99 characters of alphanumerics, `-`, `_` and `.`, or the
/// single marker `!`. They never contain slash characters.
pub fn is_valid_data_label(label: &str) -> bool {
    let length = label.chars().count();
    if length == 0 || length >= MAX_NAME_LENGTH {
        return false;
    }
    if label.contains(SLASH_CHARS) {
        return false;
    }
    let rest: String = label
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '.'))
        .collect();
    if rest == "!" {
        return true;
    }
    !rest.is_empty() && rest.chars().all(char::is_alphanumeric)
}
