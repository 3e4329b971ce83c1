//! Symbolic identifiers for ICMP types.
//!
//! Identifiers are built from the numeric value and the registry text:
//!
//! ```text
//! 3, "Destination Unreachable"        -> ICMPType3DestinationUnreachable
//! 15, "Information Request (Deprecated)" -> ICMPType15InformationRequestDeprecated
//! 1, "Destination Unreachable" (v6)   -> ICMPv6Type1DestinationUnreachable
//! ```
//!
//! The numeric value is embedded, so identifiers are unique whenever the
//! values are. Hyphens are dropped without starting a new word, so
//! `Multi-part` becomes `Multipart`.

use icmp_model::Variant;

use crate::text::normalize_newlines;

/// Characters removed from the title-cased text.
const STRIPPED: [char; 3] = ['(', ')', '-'];

pub fn synthesize_identifier(value: u8, text: &str, variant: Variant) -> String {
    let normalized = normalize_newlines(text);
    let lowered = normalized.trim().to_lowercase();

    let mut identifier = String::with_capacity(lowered.len() + 16);
    identifier.push_str(variant.identifier_prefix());
    identifier.push_str(&value.to_string());
    for token in lowered.split_whitespace() {
        push_title_cased(&mut identifier, token);
    }
    identifier
}

/// Append `token` title-cased, with stripped characters removed.
///
/// Leading punctuation is skipped when looking for the first character, so
/// `(deprecated)` becomes `Deprecated` while `6lowpan` stays as is.
fn push_title_cased(out: &mut String, token: &str) {
    let mut capitalized = false;
    for ch in token.chars() {
        if STRIPPED.contains(&ch) {
            continue;
        }
        if !capitalized && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
            capitalized = true;
        } else {
            out.push(ch);
        }
    }
}
