//! Attaching sub-codes to an existing type table.

use tracing::{debug, warn};

use icmp_model::{CodeDiagnostic, CodeRecord, Registry, RegistryDocument, TypeTable};

use crate::error::{CompileError, Result, TitleError};
use crate::profile::{CODE_RANGE_POLICY, SchemaProfile};
use crate::range::parse_range;
use crate::status::is_unassigned;
use crate::text::normalize_text;
use crate::title::decode_title;

/// Append sub-codes from every code sub-registry to their owning types.
///
/// `table` must already hold the type records. Codes whose owning type is
/// missing are dropped and returned as diagnostics; malformed titles or
/// values abort with an error.
pub fn attach_codes(
    table: &mut TypeTable,
    document: &RegistryDocument,
    profile: &SchemaProfile,
) -> Result<Vec<CodeDiagnostic>> {
    let mut diagnostics = Vec::new();
    for registry in document.registries_with_ids(&profile.code_registry_ids) {
        for sub_registry in &registry.registries {
            attach_sub_registry(table, &registry.id, sub_registry, profile, &mut diagnostics)?;
        }
    }
    Ok(diagnostics)
}

fn attach_sub_registry(
    table: &mut TypeTable,
    parent_id: &str,
    sub_registry: &Registry,
    profile: &SchemaProfile,
    diagnostics: &mut Vec<CodeDiagnostic>,
) -> Result<()> {
    if sub_registry.records.is_empty() {
        debug!(title = %sub_registry.title, "sub-registry has no records");
        return Ok(());
    }
    let type_value = decode_owning_type(&sub_registry.title, profile).map_err(|source| {
        CompileError::Title {
            registry: parent_id.to_string(),
            source,
        }
    })?;
    debug!(
        title = %sub_registry.title,
        type_value,
        records = sub_registry.records.len(),
        "attaching codes"
    );

    for record in &sub_registry.records {
        let name = normalize_text(record.text(profile.code_text));
        let unassigned = is_unassigned(&name);
        let range = parse_range(&record.value).map_err(|source| CompileError::Range {
            registry: sub_registry.id.clone(),
            value: record.value.clone(),
            source,
        })?;

        for code_value in range.expand(CODE_RANGE_POLICY) {
            match table.get_mut(type_value) {
                Some(owner) => owner.push_code(CodeRecord {
                    name: name.clone(),
                    numeric_value: code_value,
                    is_unassigned: unassigned,
                }),
                None => {
                    warn!(
                        type_value,
                        code_value,
                        title = %sub_registry.title,
                        "type not found, dropping code"
                    );
                    diagnostics.push(CodeDiagnostic::TypeNotFound {
                        type_value,
                        code_value,
                        registry_title: sub_registry.title.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Decode with the profile delimiter, then with each fallback. The error for
/// the profile delimiter is the one reported.
fn decode_owning_type(
    title: &str,
    profile: &SchemaProfile,
) -> std::result::Result<u8, TitleError> {
    let primary = decode_title(title, &profile.title_delimiter);
    if !matches!(primary, Err(TitleError::MissingDelimiter { .. })) {
        return primary;
    }
    profile
        .fallback_title_delimiters
        .iter()
        .find_map(|delimiter| decode_title(title, delimiter).ok())
        .map_or(primary, Ok)
}
