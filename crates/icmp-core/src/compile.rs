//! Two-phase compile: type table first, then sub-codes.

use std::time::Instant;

use tracing::{info, info_span};

use icmp_model::{CompiledRegistry, RegistryDocument};

use crate::codes::attach_codes;
use crate::error::Result;
use crate::profile::SchemaProfile;
use crate::types::build_type_table;

/// Compile a registry document into a type table with sub-codes.
///
/// The code phase only runs once the type phase has finished, since codes
/// are attached by looking up their owning type.
pub fn compile_registry(
    document: &RegistryDocument,
    profile: &SchemaProfile,
) -> Result<CompiledRegistry> {
    let span = info_span!("compile", variant = %profile.variant, registry = %document.id);
    let _guard = span.enter();
    let start = Instant::now();

    let mut table = build_type_table(document, profile)?;
    info!(
        types = table.len(),
        policy = ?profile.type_range_policy,
        "type table built"
    );

    let diagnostics = attach_codes(&mut table, document, profile)?;
    info!(
        types = table.len(),
        codes = table.code_count(),
        diagnostics = diagnostics.len(),
        duration_ms = start.elapsed().as_millis(),
        "code table built"
    );

    let mut compiled = CompiledRegistry::new(profile.variant, document.updated.clone(), table);
    compiled.diagnostics = diagnostics;
    Ok(compiled)
}
