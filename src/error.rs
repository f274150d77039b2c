use std::path::PathBuf;

/// Errors surfaced by the camera pipeline and demo configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required binding target is absent from the document
    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Key not bound on the parameter pane
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
