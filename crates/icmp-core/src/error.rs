//! Error types for the registry compiler.
//!
//! Every error here is fatal: it means the document no longer matches the
//! shape the schema profile describes. Missing owning types are not errors;
//! they are reported as [`icmp_model::CodeDiagnostic`] values instead.

use thiserror::Error;

/// A `<value>` field that is not `N` or `N-M` with 8-bit decimal parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("empty value field")]
    Empty,

    #[error("value field {value:?} has more than one '-'")]
    TooManyParts { value: String },

    #[error("value field {value:?}: {component:?} is not a decimal number")]
    NotNumeric { value: String, component: String },

    #[error("value field {value:?}: {component} does not fit in 0-255")]
    OutOfRange { value: String, component: String },
}

/// A sub-registry title that is not `Type<N><delimiter>...`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title {title:?} does not start with \"Type\"")]
    MissingPrefix { title: String },

    #[error("title {title:?} has no {delimiter:?} delimiter after the type number")]
    MissingDelimiter { title: String, delimiter: String },

    #[error("title {title:?}: {number:?} is not a type number in 0-255")]
    InvalidNumber { title: String, number: String },
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("registry {registry}: record value {value:?}")]
    Range {
        registry: String,
        value: String,
        #[source]
        source: RangeError,
    },

    #[error("registry {registry}: bad code sub-registry title")]
    Title {
        registry: String,
        #[source]
        source: TitleError,
    },
}

pub type Result<T> = std::result::Result<T, CompileError>;
