//! Registry ingestion: IANA protocol parameter XML to the registry tree.

pub mod error;
pub mod loader;
pub mod reader;

pub use error::{IngestError, Result};
pub use loader::{
    LoadedRegistry, RegistrySource, load_registry, load_registry_bytes, load_registry_from_reader,
    sha256_hex,
};
pub use reader::{parse_registry_str, read_registry};
