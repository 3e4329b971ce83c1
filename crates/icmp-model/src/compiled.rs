//! Compiler output handed to renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::TypeTable;
use crate::variant::Variant;

/// Placeholder used when the source document carries no `<updated>` element.
pub const UNKNOWN_UPDATED: &str = "?";

/// A non-fatal condition found while attaching sub-codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodeDiagnostic {
    /// A sub-registry names a type that the type registry never defined.
    /// The code is dropped.
    TypeNotFound {
        type_value: u8,
        code_value: u8,
        registry_title: String,
    },
}

impl fmt::Display for CodeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeNotFound {
                type_value,
                code_value,
                registry_title,
            } => write!(
                f,
                "type {type_value} not found (code {code_value} in \"{registry_title}\")"
            ),
        }
    }
}

/// Complete result of compiling one registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledRegistry {
    pub variant: Variant,
    /// Top-level `<updated>` text, passed through unmodified.
    pub updated: String,
    /// Hex SHA-256 of the source document, when the bytes were available.
    pub source_sha256: Option<String>,
    pub table: TypeTable,
    pub diagnostics: Vec<CodeDiagnostic>,
}

impl CompiledRegistry {
    pub fn new(variant: Variant, updated: Option<String>, table: TypeTable) -> Self {
        Self {
            variant,
            updated: updated.unwrap_or_else(|| UNKNOWN_UPDATED.to_string()),
            source_sha256: None,
            table,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_source_sha256(mut self, digest: impl Into<String>) -> Self {
        self.source_sha256 = Some(digest.into());
        self
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Aggregate counts for summaries.
    pub fn stats(&self) -> CompileStats {
        let mut stats = CompileStats {
            types: self.table.len(),
            diagnostics: self.diagnostics.len(),
            ..CompileStats::default()
        };
        for record in self.table.iter() {
            stats.codes += record.sub_codes.len();
            if record.is_unassigned {
                stats.unassigned_types += 1;
            }
            if record.is_deprecated {
                stats.deprecated_types += 1;
            }
            stats.unassigned_codes += record
                .sub_codes
                .iter()
                .filter(|code| code.is_unassigned)
                .count();
        }
        stats
    }
}

/// Counts describing a compiled table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileStats {
    pub types: usize,
    pub codes: usize,
    pub unassigned_types: usize,
    pub deprecated_types: usize,
    pub unassigned_codes: usize,
    pub diagnostics: usize,
}
