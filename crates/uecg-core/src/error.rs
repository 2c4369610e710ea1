use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0} (expected 2.0)")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid reference format: {0} (expected #/definitions/<Name>)")]
    InvalidRefFormat(String),

    #[error("reference target not found: {0}")]
    UnknownDefinition(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unresolved reference {reference} in {context}")]
    UnresolvedRef {
        reference: String,
        context: String,
        #[source]
        source: ResolveError,
    },

    #[error("unsupported type {type_name:?} (format {format:?}) in {context}")]
    UnsupportedType {
        type_name: Option<String>,
        format: Option<String>,
        context: String,
    },

    #[error("array definition {definition} has non-object item {item}")]
    UnsupportedArrayItem { definition: String, item: String },

    #[error("duplicate function name {name}: derived from both {first} and {second}")]
    DuplicateFunctionName {
        name: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{written} of {total} artifacts written; {} write(s) failed", failures.len())]
    Partial {
        written: usize,
        total: usize,
        failures: Vec<(PathBuf, std::io::Error)>,
    },
}
