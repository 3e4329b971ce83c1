//! Parsing and expansion of record `<value>` fields.
//!
//! A value is either a single number (`"8"`) or an inclusive-looking span
//! (`"44-252"`). How a span turns into concrete values is decided by the
//! caller through [`RangePolicy`], not by the parser.

use icmp_model::RangePolicy;

use crate::error::RangeError;

/// A parsed value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRange {
    Single(u8),
    Span { start: u8, end: u8 },
}

impl ValueRange {
    /// Concrete values covered under `policy`, ascending.
    ///
    /// A span whose start exceeds its end covers nothing.
    pub fn expand(self, policy: RangePolicy) -> Vec<u8> {
        match (self, policy) {
            (Self::Single(value), _) => vec![value],
            (Self::Span { start, end }, RangePolicy::Inclusive) => (start..=end).collect(),
            (Self::Span { start, end }, RangePolicy::ExclusiveEnd) => (start..end).collect(),
        }
    }
}

/// Parse a `N` or `N-M` value field.
pub fn parse_range(value: &str) -> Result<ValueRange, RangeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RangeError::Empty);
    }
    let parts: Vec<&str> = trimmed.split('-').collect();
    match parts.as_slice() {
        [single] => Ok(ValueRange::Single(parse_component(value, single)?)),
        [start, end] => Ok(ValueRange::Span {
            start: parse_component(value, start)?,
            end: parse_component(value, end)?,
        }),
        _ => Err(RangeError::TooManyParts {
            value: value.to_string(),
        }),
    }
}

/// Parse and expand in one step.
pub fn expand_value(value: &str, policy: RangePolicy) -> Result<Vec<u8>, RangeError> {
    Ok(parse_range(value)?.expand(policy))
}

fn parse_component(value: &str, component: &str) -> Result<u8, RangeError> {
    let component = component.trim();
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::NotNumeric {
            value: value.to_string(),
            component: component.to_string(),
        });
    }
    // Digits only, so the only possible failure is overflow.
    component.parse::<u8>().map_err(|_| RangeError::OutOfRange {
        value: value.to_string(),
        component: component.to_string(),
    })
}
