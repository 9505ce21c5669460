use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning StructureDefinitions into Rust modules.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A StructureDefinition is missing something the generator relies on,
    /// such as a snapshot or a typed element.
    #[error("Malformed definition '{name}': {message}")]
    MalformedDefinition { name: String, message: String },

    /// A field refers to a type that is not part of the generated set.
    #[error("Field '{path}' refers to '{type_name}', which is not being generated")]
    MissingType { path: String, type_name: String },

    #[error("No StructureDefinitions found under {0}")]
    NoDefinitions(PathBuf),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(name: &str, message: impl Into<String>) -> Self {
        GeneratorError::MalformedDefinition {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
