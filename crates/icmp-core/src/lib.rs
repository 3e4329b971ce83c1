//! Registry-to-table compiler.
//!
//! Turns a parsed IANA ICMP or ICMPv6 registry document into a flat table
//! keyed by numeric type, each entry carrying a synthesized identifier,
//! status flags, and its ordered sub-codes.

pub mod codes;
pub mod compile;
pub mod error;
pub mod ident;
pub mod profile;
pub mod range;
pub mod status;
pub mod text;
pub mod title;
pub mod types;

pub use codes::attach_codes;
pub use compile::compile_registry;
pub use error::{CompileError, RangeError, Result, TitleError};
pub use ident::synthesize_identifier;
pub use profile::SchemaProfile;
pub use range::{ValueRange, expand_value, parse_range};
pub use status::{StatusFlags, extract_status};
pub use text::{NO_DESCRIPTION, normalize_text};
pub use title::decode_title;
pub use types::build_type_table;
