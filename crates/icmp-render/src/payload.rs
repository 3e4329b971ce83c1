//! Template context built from a compiled registry.

use serde::Serialize;

use icmp_model::{CompiledRegistry, TypeRecord, Variant};

pub const GENERATOR: &str = "icmp-specgen";

/// Everything a template can reference.
///
/// `types` is ordered by numeric value; each type keeps its sub-codes in
/// registry traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct RenderPayload<'a> {
    /// `""` for ICMP, `"v6"` for ICMPv6.
    pub version_suffix: &'static str,
    pub protocol: &'static str,
    pub module_name: String,
    /// Name of the generated sum type. Constructor names extend it.
    pub type_name: &'static str,
    pub generator: &'static str,
    pub updated: &'a str,
    pub source_sha256: Option<&'a str>,
    pub types: Vec<&'a TypeRecord>,
}

impl<'a> RenderPayload<'a> {
    pub fn new(compiled: &'a CompiledRegistry) -> Self {
        let variant = compiled.variant;
        Self {
            version_suffix: version_suffix(variant),
            protocol: variant.protocol_name(),
            module_name: module_name(variant),
            type_name: variant.identifier_prefix(),
            generator: GENERATOR,
            updated: &compiled.updated,
            source_sha256: compiled.source_sha256.as_deref(),
            types: compiled.table.sorted(),
        }
    }
}

pub fn version_suffix(variant: Variant) -> &'static str {
    match variant {
        Variant::V4 => "",
        Variant::V6 => "v6",
    }
}

/// `Network.Types.ICMP` or `Network.Types.ICMPv6`.
pub fn module_name(variant: Variant) -> String {
    format!("Network.Types.{}", variant.protocol_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use icmp_model::TypeTable;

    #[test]
    fn payload_names_follow_variant() {
        let compiled = CompiledRegistry::new(Variant::V6, Some("2024-01-15".into()), TypeTable::new());
        let payload = RenderPayload::new(&compiled);
        assert_eq!(payload.version_suffix, "v6");
        assert_eq!(payload.module_name, "Network.Types.ICMPv6");
        assert_eq!(payload.type_name, "ICMPv6Type");
        assert_eq!(payload.updated, "2024-01-15");
        assert!(payload.source_sha256.is_none());
        assert_eq!(module_name(Variant::V4), "Network.Types.ICMP");
    }
}
