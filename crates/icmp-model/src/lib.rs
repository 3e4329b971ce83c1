pub mod compiled;
pub mod registry;
pub mod table;
pub mod variant;

pub use compiled::{CodeDiagnostic, CompileStats, CompiledRegistry, UNKNOWN_UPDATED};
pub use registry::{Record, Registry, RegistryDocument, TextField};
pub use table::{CodeRecord, TypeRecord, TypeTable};
pub use variant::{RangePolicy, Variant};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_first_writer() {
        let mut table = TypeTable::new();
        assert!(table.insert_if_absent(TypeRecord::new(3, "ICMPType3First", "First")));
        assert!(!table.insert_if_absent(TypeRecord::new(3, "ICMPType3Second", "Second")));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(3).unwrap().symbolic_name, "ICMPType3First");
    }

    #[test]
    fn compiled_registry_serializes() {
        let mut table = TypeTable::new();
        table.insert_if_absent(TypeRecord::new(0, "ICMPType0EchoReply", "Echo Reply"));
        let compiled = CompiledRegistry::new(Variant::V4, None, table);
        let json = serde_json::to_string(&compiled).expect("serialize compiled registry");
        let round: CompiledRegistry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round.updated, UNKNOWN_UPDATED);
        assert_eq!(round.table.len(), 1);
        assert_eq!(round.variant, Variant::V4);
    }
}
