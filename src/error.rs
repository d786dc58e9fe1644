use std::path::PathBuf;

use crate::resource::gltf::document::{ComponentType, EntityKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal errors raised while reading, validating or resolving a glTF document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: unexpected character {found:?}, expected {expected}")]
    UnexpectedCharacter {
        line: usize,
        expected: String,
        found: char,
    },

    #[error("line {line}: end of file reached while scanning")]
    UnexpectedEndOfInput { line: usize },

    #[error("line {line}: invalid number {text:?}")]
    InvalidNumber { line: usize, text: String },

    #[error("line {line}: unknown key word {keyword:?}")]
    UnknownKeyword { line: usize, keyword: String },

    #[error("line {line}: value nested deeper than {limit} levels")]
    ValueTooDeep { line: usize, limit: usize },

    #[error("line {line}: wrong keyword {keyword:?} in {context}")]
    WrongKeywordInContext {
        line: usize,
        keyword: String,
        context: String,
    },

    #[error("self test failed for {kind} {name:?}")]
    SelfTestFailed { kind: EntityKind, name: String },

    #[error("no {kind} exists with the given ID {name:?}")]
    MissingEntity { kind: EntityKind, name: String },

    #[error("bad target for accessor {accessor:?}: its buffer view must be bound as {expected}")]
    BadAccessorTarget {
        accessor: String,
        expected: &'static str,
    },

    #[error("unsupported attribute type {semantic} on accessor {accessor:?}")]
    UnsupportedSemantic { accessor: String, semantic: String },

    #[error("index accessor {accessor:?} has component type {component_type:?}, not u16")]
    UnsupportedIndexType {
        accessor: String,
        component_type: ComponentType,
    },

    #[error("unable to find {}", path.display())]
    BufferFileNotFound { path: PathBuf },

    #[error("{} is not a regular file", path.display())]
    BufferFileNotRegular { path: PathBuf },

    #[error("failed to read {}", path.display())]
    BufferFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid size/offset for buffer view {name:?}: {offset} + {length} > {size}")]
    InvalidBufferViewBounds {
        name: String,
        offset: usize,
        length: usize,
        size: usize,
    },

    #[error("byte length {length} of buffer view {name:?} is not a multiple of {element_size}")]
    MisalignedBufferView {
        name: String,
        length: usize,
        element_size: usize,
    },

    #[error("invalid buffer view target for {name:?}")]
    InvalidBufferViewTarget { name: String },

    #[error("failed to read glTF document {}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the given path is not a file: {}", path.display())]
    DocumentNotRegular { path: PathBuf },
}

impl Error {
    /// Line the error was detected on, for errors raised while parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedCharacter { line, .. }
            | Error::UnexpectedEndOfInput { line }
            | Error::InvalidNumber { line, .. }
            | Error::ValueTooDeep { line, .. }
            | Error::UnknownKeyword { line, .. }
            | Error::WrongKeywordInContext { line, .. } => Some(*line),
            _ => None,
        }
    }
}
