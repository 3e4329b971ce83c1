//! Streaming reader for IANA protocol parameter documents.
//!
//! The reader walks `quick-xml` events and keeps only what the registry
//! compiler consumes:
//!
//! - `<registry id="...">` elements, nested to any depth
//! - `<title>` and the root-level `<updated>`
//! - `<record>` with its `<value>`, `<name>` and `<description>`
//!
//! Everything else (`xref`, `note`, `range`, `people`, `footnote`, ...) is
//! skipped with its subtree. Text fields keep only their own character
//! data, so `<description>Reserved <xref type="rfc" data="rfc1234"/></description>`
//! reads as `"Reserved "`.

use std::fmt::Display;
use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};

use icmp_model::{Record, Registry, RegistryDocument};

use crate::error::{IngestError, Result};

/// Owned view of the events the parser cares about.
enum Token {
    Open {
        name: Vec<u8>,
        id: Option<String>,
        empty: bool,
    },
    Close,
    Text(String),
    Eof,
}

struct TokenStream<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> TokenStream<R> {
    fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        loop {
            self.buf.clear();
            let token = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => Token::Open {
                    name: e.local_name().as_ref().to_vec(),
                    id: id_attribute(&e),
                    empty: false,
                },
                Ok(Event::Empty(e)) => Token::Open {
                    name: e.local_name().as_ref().to_vec(),
                    id: id_attribute(&e),
                    empty: true,
                },
                Ok(Event::End(_)) => Token::Close,
                Ok(Event::Text(e)) => {
                    let text = e.decode().map_err(|err| xml_error(&self.reader, err))?;
                    Token::Text(text.into_owned())
                }
                Ok(Event::CData(e)) => {
                    let text = e.decode().map_err(|err| xml_error(&self.reader, err))?;
                    Token::Text(text.into_owned())
                }
                Ok(Event::GeneralRef(e)) => {
                    let resolved = match e.resolve_char_ref() {
                        Ok(Some(ch)) => ch.to_string(),
                        Ok(None) => {
                            let name = e.decode().map_err(|err| xml_error(&self.reader, err))?;
                            match resolve_predefined_entity(&name) {
                                Some(value) => value.to_string(),
                                None => format!("&{name};"),
                            }
                        }
                        Err(err) => return Err(xml_error(&self.reader, err)),
                    };
                    Token::Text(resolved)
                }
                Ok(Event::Eof) => Token::Eof,
                Ok(_) => continue,
                Err(err) => return Err(xml_error(&self.reader, err)),
            };
            return Ok(token);
        }
    }
}

fn xml_error<R>(reader: &Reader<R>, err: impl Display) -> IngestError {
    IngestError::xml(reader.error_position() as u64, err.to_string())
}

fn id_attribute(element: &BytesStart<'_>) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"id")
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn element_label(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

/// Parse a registry document held in memory.
pub fn parse_registry_str(xml: &str) -> Result<RegistryDocument> {
    read_registry(xml.as_bytes())
}

/// Parse a registry document from any buffered source.
///
/// The first element of the document must be `<registry>`.
pub fn read_registry<R: BufRead>(source: R) -> Result<RegistryDocument> {
    let mut tokens = TokenStream::new(source);
    loop {
        match tokens.next_token()? {
            Token::Open { name, id, empty } if name == b"registry" => {
                let node = read_registry_element(&mut tokens, id.unwrap_or_default(), empty)?;
                let document = RegistryDocument {
                    id: node.registry.id,
                    title: node.registry.title,
                    updated: node.updated,
                    registries: node.registry.registries,
                };
                debug!(
                    id = %document.id,
                    registries = document.registries.len(),
                    updated = document.updated.as_deref().unwrap_or("?"),
                    "registry document parsed"
                );
                return Ok(document);
            }
            Token::Open { .. } | Token::Eof => return Err(IngestError::MissingRoot),
            Token::Close | Token::Text(_) => {}
        }
    }
}

struct RegistryNode {
    registry: Registry,
    updated: Option<String>,
}

fn read_registry_element<R: BufRead>(
    tokens: &mut TokenStream<R>,
    id: String,
    empty: bool,
) -> Result<RegistryNode> {
    let mut node = RegistryNode {
        registry: Registry {
            id,
            ..Registry::default()
        },
        updated: None,
    };
    if empty {
        return Ok(node);
    }
    loop {
        match tokens.next_token()? {
            Token::Open { name, id, empty } => match name.as_slice() {
                b"title" => node.registry.title = read_text(tokens, "title", empty)?,
                b"updated" => node.updated = Some(read_text(tokens, "updated", empty)?),
                b"record" => node.registry.records.push(read_record(tokens, empty)?),
                b"registry" => {
                    let child = read_registry_element(tokens, id.unwrap_or_default(), empty)?;
                    node.registry.registries.push(child.registry);
                }
                _ => skip_element(tokens, &name, empty)?,
            },
            Token::Close => {
                trace!(
                    id = %node.registry.id,
                    records = node.registry.records.len(),
                    children = node.registry.registries.len(),
                    "registry read"
                );
                return Ok(node);
            }
            Token::Text(_) => {}
            Token::Eof => {
                return Err(IngestError::UnexpectedEof {
                    element: "registry".to_string(),
                });
            }
        }
    }
}

fn read_record<R: BufRead>(tokens: &mut TokenStream<R>, empty: bool) -> Result<Record> {
    let mut record = Record::default();
    if empty {
        return Ok(record);
    }
    loop {
        match tokens.next_token()? {
            Token::Open { name, empty, .. } => match name.as_slice() {
                b"value" => record.value = read_text(tokens, "value", empty)?,
                b"name" => record.name = read_text(tokens, "name", empty)?,
                b"description" => record.description = read_text(tokens, "description", empty)?,
                _ => skip_element(tokens, &name, empty)?,
            },
            Token::Close => return Ok(record),
            Token::Text(_) => {}
            Token::Eof => {
                return Err(IngestError::UnexpectedEof {
                    element: "record".to_string(),
                });
            }
        }
    }
}

/// Collect the element's own character data, skipping child elements.
fn read_text<R: BufRead>(tokens: &mut TokenStream<R>, element: &str, empty: bool) -> Result<String> {
    let mut text = String::new();
    if empty {
        return Ok(text);
    }
    loop {
        match tokens.next_token()? {
            Token::Text(chunk) => text.push_str(&chunk),
            Token::Open { name, empty, .. } => skip_element(tokens, &name, empty)?,
            Token::Close => return Ok(text),
            Token::Eof => {
                return Err(IngestError::UnexpectedEof {
                    element: element.to_string(),
                });
            }
        }
    }
}

fn skip_element<R: BufRead>(tokens: &mut TokenStream<R>, name: &[u8], empty: bool) -> Result<()> {
    if empty {
        return Ok(());
    }
    let mut depth = 1usize;
    while depth > 0 {
        match tokens.next_token()? {
            Token::Open { empty: false, .. } => depth += 1,
            Token::Open { .. } | Token::Text(_) => {}
            Token::Close => depth -= 1,
            Token::Eof => {
                return Err(IngestError::UnexpectedEof {
                    element: element_label(name),
                });
            }
        }
    }
    Ok(())
}
