//! Schema profiles for the two registry variants.
//!
//! The builders never branch on [`Variant`] directly. Everything that
//! differs between the ICMP and ICMPv6 documents is captured here:
//!
//! | Setting               | ICMP (v4)                 | ICMPv6 (v6)                                  |
//! |-----------------------|---------------------------|----------------------------------------------|
//! | type registries       | `icmp-parameters-types`   | `icmpv6-parameters-2`, `icmpv6-parameters-3` |
//! | code registries       | `icmp-parameters-codes`   | same as type registries                      |
//! | record text element   | `<description>`           | `<name>`                                     |
//! | title delimiter       | em dash (`—`)             | hyphen (`-`)                                 |
//! | fallback delimiters   | `â€”` (mis-decoded em dash) | none                                        |
//! | deprecated detection  | yes                       | no                                           |

use icmp_model::{RangePolicy, TextField, Variant};

pub const V4_TYPES_REGISTRY: &str = "icmp-parameters-types";
pub const V4_CODES_REGISTRY: &str = "icmp-parameters-codes";
pub const V6_TYPE_REGISTRIES: [&str; 2] = ["icmpv6-parameters-2", "icmpv6-parameters-3"];

pub const V4_TITLE_DELIMITER: &str = "\u{2014}";
pub const V6_TITLE_DELIMITER: &str = "-";

/// The em dash as its UTF-8 bytes read through cp1252. Copies of the ICMP
/// registry that were re-encoded on the way carry this in their titles.
pub const V4_MISDECODED_TITLE_DELIMITER: &str = "\u{e2}\u{20ac}\u{201d}";

/// Sub-code values always cover the full span.
pub const CODE_RANGE_POLICY: RangePolicy = RangePolicy::Inclusive;

/// Variant-specific configuration consumed by the table builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaProfile {
    pub variant: Variant,
    /// Top-level registries holding type records.
    pub type_registry_ids: Vec<String>,
    /// Top-level registries whose nested sub-registries hold codes.
    pub code_registry_ids: Vec<String>,
    pub type_text: TextField,
    pub code_text: TextField,
    pub title_delimiter: String,
    /// Tried in order when a title lacks `title_delimiter`.
    pub fallback_title_delimiters: Vec<String>,
    pub type_range_policy: RangePolicy,
    /// Derive `is_deprecated` from type text.
    pub detect_deprecated: bool,
}

impl SchemaProfile {
    /// Profile for `icmp-parameters.xml`.
    pub fn v4() -> Self {
        Self {
            variant: Variant::V4,
            type_registry_ids: vec![V4_TYPES_REGISTRY.to_string()],
            code_registry_ids: vec![V4_CODES_REGISTRY.to_string()],
            type_text: TextField::Description,
            code_text: TextField::Description,
            title_delimiter: V4_TITLE_DELIMITER.to_string(),
            fallback_title_delimiters: vec![V4_MISDECODED_TITLE_DELIMITER.to_string()],
            type_range_policy: RangePolicy::Inclusive,
            detect_deprecated: true,
        }
    }

    /// Profile for `icmpv6-parameters.xml`.
    pub fn v6() -> Self {
        let ids: Vec<String> = V6_TYPE_REGISTRIES.into_iter().map(String::from).collect();
        Self {
            variant: Variant::V6,
            type_registry_ids: ids.clone(),
            code_registry_ids: ids,
            type_text: TextField::Name,
            code_text: TextField::Name,
            title_delimiter: V6_TITLE_DELIMITER.to_string(),
            fallback_title_delimiters: Vec::new(),
            type_range_policy: RangePolicy::Inclusive,
            detect_deprecated: false,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::V4 => Self::v4(),
            Variant::V6 => Self::v6(),
        }
    }

    /// Sets how type value spans are expanded.
    ///
    /// [`RangePolicy::ExclusiveEnd`] reproduces the historical ICMP output,
    /// which dropped the upper bound of every type span.
    #[must_use]
    pub fn with_type_range_policy(mut self, policy: RangePolicy) -> Self {
        self.type_range_policy = policy;
        self
    }

    /// Overrides the sub-registry title delimiter and drops the fallbacks.
    #[must_use]
    pub fn with_title_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.title_delimiter = delimiter.into();
        self.fallback_title_delimiters.clear();
        self
    }
}

impl Default for SchemaProfile {
    fn default() -> Self {
        Self::v4()
    }
}
