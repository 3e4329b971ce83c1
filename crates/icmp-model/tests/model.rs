//! Tests for icmp-model types.

use icmp_model::{
    CodeDiagnostic, CodeRecord, CompiledRegistry, Record, Registry, RegistryDocument, TextField,
    TypeRecord, TypeTable, Variant,
};

fn sample_table() -> TypeTable {
    let mut table = TypeTable::new();
    let mut unreachable =
        TypeRecord::new(3, "ICMPType3DestinationUnreachable", "Destination Unreachable");
    unreachable.push_code(CodeRecord {
        name: "Net Unreachable".to_string(),
        numeric_value: 0,
        is_unassigned: false,
    });
    unreachable.push_code(CodeRecord {
        name: "Unassigned".to_string(),
        numeric_value: 16,
        is_unassigned: true,
    });
    table.insert_if_absent(unreachable);
    table.insert_if_absent(TypeRecord::new(0, "ICMPType0EchoReply", "Echo Reply"));
    table.insert_if_absent(
        TypeRecord::new(7, "ICMPType7Unassigned", "Unassigned").with_unassigned(true),
    );
    table.insert_if_absent(
        TypeRecord::new(
            15,
            "ICMPType15InformationRequestDeprecated",
            "Information Request (Deprecated)",
        )
        .with_deprecated(true),
    );
    table
}

#[test]
fn sorted_orders_by_numeric_value() {
    let table = sample_table();
    let values: Vec<u8> = table
        .sorted()
        .iter()
        .map(|record| record.numeric_value)
        .collect();
    assert_eq!(values, vec![0, 3, 7, 15]);
}

#[test]
fn table_serializes_as_sorted_list() {
    let table = sample_table();
    let json = serde_json::to_value(&table).expect("serialize table");
    let list = json.as_array().expect("table serializes as array");
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["numeric_value"], 0);
    assert_eq!(list[1]["sub_codes"][0]["name"], "Net Unreachable");
}

#[test]
fn stats_count_flags_and_codes() {
    let mut compiled = CompiledRegistry::new(Variant::V4, Some("2024-01-01".into()), sample_table());
    compiled.diagnostics.push(CodeDiagnostic::TypeNotFound {
        type_value: 200,
        code_value: 0,
        registry_title: "Type 200 — Missing".to_string(),
    });
    let stats = compiled.stats();
    assert_eq!(stats.types, 4);
    assert_eq!(stats.codes, 2);
    assert_eq!(stats.unassigned_types, 1);
    assert_eq!(stats.deprecated_types, 1);
    assert_eq!(stats.unassigned_codes, 1);
    assert_eq!(stats.diagnostics, 1);
    assert!(compiled.has_diagnostics());
    assert_eq!(compiled.updated, "2024-01-01");
}

#[test]
fn diagnostic_display_names_type_and_code() {
    let diagnostic = CodeDiagnostic::TypeNotFound {
        type_value: 200,
        code_value: 4,
        registry_title: "Type 200 - Nothing".to_string(),
    };
    assert_eq!(
        diagnostic.to_string(),
        "type 200 not found (code 4 in \"Type 200 - Nothing\")"
    );
}

#[test]
fn variant_labels() {
    assert_eq!(Variant::V6.identifier_prefix(), "ICMPv6Type");
    assert_eq!(Variant::V4.to_string(), "v4");
}

#[test]
fn document_selects_registries_by_id() {
    let document = RegistryDocument {
        id: "icmpv6-parameters".to_string(),
        title: "ICMPv6 Parameters".to_string(),
        updated: None,
        registries: vec![
            Registry {
                id: "icmpv6-parameters-2".to_string(),
                ..Registry::default()
            },
            Registry {
                id: "icmpv6-parameters-5".to_string(),
                ..Registry::default()
            },
            Registry {
                id: "icmpv6-parameters-3".to_string(),
                ..Registry::default()
            },
        ],
    };
    let ids = vec![
        "icmpv6-parameters-2".to_string(),
        "icmpv6-parameters-3".to_string(),
    ];
    let selected: Vec<&str> = document
        .registries_with_ids(&ids)
        .map(|registry| registry.id.as_str())
        .collect();
    assert_eq!(selected, vec!["icmpv6-parameters-2", "icmpv6-parameters-3"]);
    assert!(document.registry("icmpv6-parameters-5").is_some());
}

#[test]
fn record_text_selects_field() {
    let record = Record {
        value: "1".to_string(),
        name: "Destination Unreachable".to_string(),
        description: "Other".to_string(),
    };
    assert_eq!(record.text(TextField::Name), "Destination Unreachable");
    assert_eq!(record.text(TextField::Description), "Other");
}
