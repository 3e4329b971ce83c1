//! Owning type numbers embedded in sub-registry titles.
//!
//! Code sub-registries are titled `Type 3 — Destination Unreachable` (ICMP)
//! or `Type 1 - Destination Unreachable` (ICMPv6). The delimiter is chosen
//! by the schema profile; it is never guessed from the title.

use crate::error::TitleError;

pub const TITLE_PREFIX: &str = "Type";

/// Extract `N` from a `Type<N><delimiter>...` title.
///
/// Whitespace is removed from both the title and the delimiter before
/// matching, so `Type 3 — Foo` and `Type3—Foo` decode the same.
pub fn decode_title(title: &str, delimiter: &str) -> Result<u8, TitleError> {
    let compact: String = title.chars().filter(|ch| !ch.is_whitespace()).collect();
    let delimiter: String = delimiter.chars().filter(|ch| !ch.is_whitespace()).collect();

    let rest = compact
        .strip_prefix(TITLE_PREFIX)
        .ok_or_else(|| TitleError::MissingPrefix {
            title: title.to_string(),
        })?;
    let split = if delimiter.is_empty() {
        None
    } else {
        rest.find(delimiter.as_str())
    };
    let Some(split) = split else {
        return Err(TitleError::MissingDelimiter {
            title: title.to_string(),
            delimiter,
        });
    };

    let number = &rest[..split];
    let invalid = || TitleError::InvalidNumber {
        title: title.to_string(),
        number: number.to_string(),
    };
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    number.parse::<u8>().map_err(|_| invalid())
}
