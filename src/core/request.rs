use std::path::{Path, PathBuf};

use super::error::{EmbedError, Result};
use crate::formatters::{ArrayFormatter, BinaryFormatter, TextFormatter};

/// Which half of the generated pair to render
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Mode {
    /// Header block: extern declarations only, no storage
    Declaration,
    /// Source block: the static array and the symbol initializers
    #[default]
    Definition,
}

/// How the file contents are embedded
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Encoding {
    /// `unsigned char` array of hex literals, byte for byte
    #[default]
    Binary,
    /// `char` string literal, null-terminated by the compiler
    Text,
}

impl Encoding {
    pub fn formatter(self) -> Box<dyn ArrayFormatter> {
        match self {
            Encoding::Binary => Box::new(BinaryFormatter::new()),
            Encoding::Text => Box::new(TextFormatter::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Text => "text",
        }
    }
}

/// One embedding job: a source file plus how to render it
#[derive(Debug, Clone)]
pub struct EmbedRequest {
    pub source_path: PathBuf,
    /// Output file; `None` means standard output
    pub destination: Option<PathBuf>,
    /// Overrides the symbol derived from the file name
    pub symbol: Option<String>,
    pub mode: Mode,
    pub encoding: Encoding,
}

impl EmbedRequest {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            destination: None,
            symbol: None,
            mode: Mode::default(),
            encoding: Encoding::default(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The symbol the generated code exports.
    ///
    /// An explicit non-empty symbol wins; otherwise the file name minus its
    /// last extension is used, so `archive.tar.gz` becomes `archive.tar`.
    pub fn symbol(&self) -> Result<String> {
        match self.symbol.as_deref() {
            Some(symbol) if !symbol.is_empty() => Ok(symbol.to_string()),
            _ => derive_symbol(&self.source_path),
        }
    }
}

/// Symbol for a source path: the base name without its final extension.
///
/// A stem that is not valid UTF-8 has no usable symbol; pass one explicitly.
pub fn derive_symbol(source_path: &Path) -> Result<String> {
    source_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| EmbedError::MissingSymbol {
            path: source_path.to_path_buf(),
        })
}
