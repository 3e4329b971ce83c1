//! Schema variant selection and range expansion policies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry schema variant.
///
/// The two IANA documents share the same conceptual shape but differ in
/// registry ids, text element names, and title delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// ICMP (`icmp-parameters.xml`).
    #[default]
    V4,
    /// ICMPv6 (`icmpv6-parameters.xml`).
    V6,
}

impl Variant {
    /// Short tag used in logs and serialized output ("v4" or "v6").
    pub fn tag(self) -> &'static str {
        match self {
            Self::V4 => "v4",
            Self::V6 => "v6",
        }
    }

    /// Prefix placed before the numeric value in synthesized identifiers.
    pub fn identifier_prefix(self) -> &'static str {
        match self {
            Self::V4 => "ICMPType",
            Self::V6 => "ICMPv6Type",
        }
    }

    /// Protocol label used in generated module names.
    pub fn protocol_name(self) -> &'static str {
        match self {
            Self::V4 => "ICMP",
            Self::V6 => "ICMPv6",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How a parsed `N-M` value field is turned into concrete values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// `N-M` covers `N..=M`.
    #[default]
    Inclusive,
    /// `N-M` covers `N..M`; a single `N` still covers `{N}`.
    ///
    /// Matches the historical ICMP type expansion, which dropped the upper
    /// bound of every range. Only useful for output parity with that tool.
    ExclusiveEnd,
}
