//! JSON export and file output.

use std::fs;
use std::path::Path;

use tracing::info;

use icmp_model::CompiledRegistry;

use crate::error::{RenderError, Result};

/// The compiled registry as pretty-printed JSON, types sorted by value.
pub fn render_json(compiled: &CompiledRegistry) -> Result<String> {
    let mut json = serde_json::to_string_pretty(compiled)?;
    json.push('\n');
    Ok(json)
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;
    info!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}
