//! Status flags encoded as substrings of registry text.
//!
//! The registry has no structured status field; assignment status is only
//! visible in the free text. Matching is exact and case-sensitive.

/// Marker for unassigned values.
pub const UNASSIGNED_MARKER: &str = "Unassigned";

/// Marker for deprecated ICMP types.
pub const DEPRECATED_MARKER: &str = "(Deprecated)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub is_unassigned: bool,
    /// Only meaningful for ICMP type descriptions.
    pub is_deprecated: bool,
}

pub fn extract_status(text: &str) -> StatusFlags {
    StatusFlags {
        is_unassigned: is_unassigned(text),
        is_deprecated: is_deprecated(text),
    }
}

pub fn is_unassigned(text: &str) -> bool {
    text.contains(UNASSIGNED_MARKER)
}

pub fn is_deprecated(text: &str) -> bool {
    text.contains(DEPRECATED_MARKER)
}
