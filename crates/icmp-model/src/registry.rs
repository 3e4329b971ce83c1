//! Registry tree as read from an IANA protocol parameter document.
//!
//! Only the parts the compiler consumes are kept: registry ids and titles,
//! record values, and record text. Text fields hold the element's own
//! character data; nested markup such as `xref` is not represented.

use serde::{Deserialize, Serialize};

/// Root `<registry>` element of a parameter document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub id: String,
    pub title: String,
    /// Contents of the top-level `<updated>` element, if present.
    pub updated: Option<String>,
    pub registries: Vec<Registry>,
}

impl RegistryDocument {
    /// Top-level registries whose id is one of `ids`, in document order.
    pub fn registries_with_ids<'a>(
        &'a self,
        ids: &'a [String],
    ) -> impl Iterator<Item = &'a Registry> + 'a {
        self.registries
            .iter()
            .filter(move |registry| ids.iter().any(|id| *id == registry.id))
    }

    /// Finds a top-level registry by exact id.
    pub fn registry(&self, id: &str) -> Option<&Registry> {
        self.registries.iter().find(|registry| registry.id == id)
    }
}

/// A `<registry>` element, either top-level or nested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub id: String,
    pub title: String,
    pub records: Vec<Record>,
    pub registries: Vec<Registry>,
}

/// A `<record>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw `<value>` text: `N` or `N-M`.
    pub value: String,
    /// `<name>` text (ICMPv6 records).
    pub name: String,
    /// `<description>` text (ICMP records).
    pub description: String,
}

/// Which record element carries the human-readable text for a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextField {
    Name,
    Description,
}

impl Record {
    /// Returns the record text from the requested element.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Description => &self.description,
        }
    }
}
