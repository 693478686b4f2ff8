//! Error types for vdt-codegen.

use std::path::PathBuf;

use thiserror::Error;

/// Code generation error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A precision keyword other than `float` or `double`.
    #[error("unknown precision: {0}")]
    UnknownPrecision(String),

    /// A function name that is not in the catalog.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Formatting into the in-memory buffer failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// The generated unit could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for code generation.
pub type Result<T> = std::result::Result<T, Error>;
