//! Loading registry documents from files or stdin.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::Digest;
use tracing::info;

use icmp_model::RegistryDocument;

use crate::error::{IngestError, Result};
use crate::reader::read_registry;

/// Where a registry document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// A parsed document together with the checksum of its raw bytes.
#[derive(Debug, Clone)]
pub struct LoadedRegistry {
    pub document: RegistryDocument,
    pub sha256: String,
    pub source: RegistrySource,
}

/// Hex-encoded SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Load and parse a registry document from `path`.
pub fn load_registry(path: &Path) -> Result<LoadedRegistry> {
    let bytes = std::fs::read(path).map_err(|err| IngestError::io(path, err))?;
    load_registry_bytes(&bytes, RegistrySource::File(path.to_path_buf()))
}

/// Load and parse a registry document from a reader such as stdin.
pub fn load_registry_from_reader(mut reader: impl Read) -> Result<LoadedRegistry> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(IngestError::Stdin)?;
    load_registry_bytes(&bytes, RegistrySource::Stdin)
}

/// Parse a registry document from raw bytes.
pub fn load_registry_bytes(bytes: &[u8], source: RegistrySource) -> Result<LoadedRegistry> {
    let sha256 = sha256_hex(bytes);
    let document = read_registry(bytes)?;
    info!(
        source = %source,
        bytes = bytes.len(),
        registries = document.registries.len(),
        sha256 = %sha256,
        "registry loaded"
    );
    Ok(LoadedRegistry {
        document,
        sha256,
        source,
    })
}
