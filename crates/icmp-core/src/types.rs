//! Type table construction from the top-level type registries.

use tracing::{debug, warn};

use icmp_model::{Record, RegistryDocument, TypeRecord, TypeTable};

use crate::error::{CompileError, RangeError, Result};
use crate::ident::synthesize_identifier;
use crate::profile::SchemaProfile;
use crate::range::parse_range;
use crate::status::extract_status;
use crate::text::normalize_text;

/// Build the type table from every type registry named by `profile`.
///
/// Records are visited in document order. The first record that produces a
/// given numeric value defines it; later records covering the same value
/// leave the existing entry untouched.
pub fn build_type_table(document: &RegistryDocument, profile: &SchemaProfile) -> Result<TypeTable> {
    let mut table = TypeTable::new();
    let mut matched = 0usize;
    for registry in document.registries_with_ids(&profile.type_registry_ids) {
        matched += 1;
        debug!(
            registry = %registry.id,
            records = registry.records.len(),
            "expanding type records"
        );
        for record in &registry.records {
            insert_type_records(&mut table, record, profile).map_err(|source| {
                CompileError::Range {
                    registry: registry.id.clone(),
                    value: record.value.clone(),
                    source,
                }
            })?;
        }
    }
    if matched == 0 {
        warn!(
            variant = %profile.variant,
            expected = ?profile.type_registry_ids,
            "no type registry found in document"
        );
    }
    Ok(table)
}

/// Insert one type record per value covered by `record`.
fn insert_type_records(
    table: &mut TypeTable,
    record: &Record,
    profile: &SchemaProfile,
) -> std::result::Result<(), RangeError> {
    let text = record.text(profile.type_text);
    let description = normalize_text(text);
    let status = extract_status(&description);
    let is_deprecated = profile.detect_deprecated && status.is_deprecated;

    let range = parse_range(&record.value)?;
    for value in range.expand(profile.type_range_policy) {
        if table.contains(value) {
            debug!(value, "type already defined, keeping first definition");
            continue;
        }
        let symbolic_name = synthesize_identifier(value, text, profile.variant);
        let type_record = TypeRecord::new(value, symbolic_name, description.clone())
            .with_deprecated(is_deprecated)
            .with_unassigned(status.is_unassigned);
        table.insert_if_absent(type_record);
    }
    Ok(())
}
