use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid template {origin}")]
    Template {
        origin: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template")]
    Render(#[source] Box<handlebars::RenderError>),

    #[error("failed to read template {path}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize compiled registry")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
