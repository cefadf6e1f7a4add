use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{EmbedError, Result};
use super::request::{derive_symbol, EmbedRequest, Encoding, Mode};
use crate::formatters::CSourceFormatter;

/// Rendered declaration or definition block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOutput {
    pub symbol: String,
    pub mode: Mode,
    pub encoding: Encoding,
    /// Size of the embedded contents, 0 for declarations
    pub byte_len: usize,
    pub text: String,
}

impl EmbedOutput {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Header and source rendered together for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPair {
    pub declaration: EmbedOutput,
    pub definition: EmbedOutput,
}

impl EmbedPair {
    pub fn symbol(&self) -> &str {
        &self.definition.symbol
    }
}

/// Paths written by [`Embedder::write_pair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPair {
    pub header_path: PathBuf,
    pub source_path: PathBuf,
}

pub struct Embedder {
    c_source: CSourceFormatter,
}

impl Embedder {
    pub fn new() -> Self {
        Self {
            c_source: CSourceFormatter::new(),
        }
    }

    /// Render the block selected by `request.mode`.
    ///
    /// Binary declarations only check that the source can be opened. Text
    /// declarations also check that it decodes as UTF-8, so a header is never
    /// produced for a file whose definition would fail. Definitions read the
    /// whole file.
    pub fn generate(&self, request: &EmbedRequest) -> Result<EmbedOutput> {
        let symbol = request.symbol()?;
        let source = &request.source_path;
        debug!(
            symbol = %symbol,
            mode = ?request.mode,
            encoding = request.encoding.as_str(),
            source = %source.display(),
            "generating embed block"
        );

        match request.mode {
            Mode::Declaration => {
                match request.encoding {
                    Encoding::Binary => {
                        File::open(source).map_err(|err| EmbedError::io(source, err))?;
                    }
                    Encoding::Text => {
                        let contents =
                            fs::read(source).map_err(|err| EmbedError::io(source, err))?;
                        std::str::from_utf8(&contents).map_err(|err| EmbedError::Encoding {
                            path: source.to_path_buf(),
                            source: err,
                        })?;
                    }
                }
                Ok(self.declaration(symbol, request.encoding))
            }
            Mode::Definition => {
                let contents = fs::read(source).map_err(|err| EmbedError::io(source, err))?;
                self.definition(symbol, request.encoding, source, &contents)
            }
        }
    }

    /// Render declaration and definition for the same source, reading it once
    pub fn generate_pair(
        &self,
        source: &Path,
        symbol: Option<&str>,
        encoding: Encoding,
    ) -> Result<EmbedPair> {
        let symbol = match symbol {
            Some(symbol) if !symbol.is_empty() => symbol.to_string(),
            _ => derive_symbol(source)?,
        };

        let contents = fs::read(source).map_err(|err| EmbedError::io(source, err))?;
        let definition = self.definition(symbol.clone(), encoding, source, &contents)?;
        let declaration = self.declaration(symbol, encoding);

        Ok(EmbedPair {
            declaration,
            definition,
        })
    }

    /// Write `output` to `destination`, or to stdout when there is none
    pub fn write_output(&self, output: &EmbedOutput, destination: Option<&Path>) -> Result<()> {
        match destination {
            Some(path) => write_file(path, output.as_str()),
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle
                    .write_all(output.as_str().as_bytes())
                    .and_then(|()| handle.flush())
                    .map_err(|err| EmbedError::io("<stdout>", err))
            }
        }
    }

    /// Generate the requested block and write it to the request's destination
    pub fn run(&self, request: &EmbedRequest) -> Result<EmbedOutput> {
        let output = self.generate(request)?;
        self.write_output(&output, request.destination.as_deref())?;
        Ok(output)
    }

    /// Write `<symbol>.h` and `<symbol>.c` into `output_dir`
    pub fn write_pair(&self, pair: &EmbedPair, output_dir: &Path) -> Result<WrittenPair> {
        let header_path = output_dir.join(format!("{}.h", pair.symbol()));
        let source_path = output_dir.join(format!("{}.c", pair.symbol()));

        write_file(&header_path, pair.declaration.as_str())?;
        write_file(&source_path, pair.definition.as_str())?;

        Ok(WrittenPair {
            header_path,
            source_path,
        })
    }

    fn declaration(&self, symbol: String, encoding: Encoding) -> EmbedOutput {
        let formatter = encoding.formatter();
        let text = self
            .c_source
            .format_declaration(&symbol, formatter.element_type());

        EmbedOutput {
            symbol,
            mode: Mode::Declaration,
            encoding,
            byte_len: 0,
            text,
        }
    }

    fn definition(
        &self,
        symbol: String,
        encoding: Encoding,
        source: &Path,
        contents: &[u8],
    ) -> Result<EmbedOutput> {
        let formatter = encoding.formatter();
        let initializer =
            formatter
                .format_initializer(contents)
                .map_err(|source_err| EmbedError::Encoding {
                    path: source.to_path_buf(),
                    source: source_err,
                })?;
        debug!(bytes = contents.len(), "rendered initializer");

        let text = self.c_source.format_definition(
            &symbol,
            formatter.element_type(),
            &initializer,
            formatter.terminator_len(),
        );

        Ok(EmbedOutput {
            symbol,
            mode: Mode::Definition,
            encoding,
            byte_len: contents.len(),
            text,
        })
    }
}

impl Default for Embedder {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory a pair lands in when none is given: next to the source
pub fn default_output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Embed `source` as a byte array, writing the header/source pair
pub fn bin2c(source: &Path, output_dir: Option<&Path>, symbol: Option<&str>) -> Result<WrittenPair> {
    embed_to_directory(source, output_dir, symbol, Encoding::Binary)
}

/// Embed `source` as a null-terminated string, writing the header/source pair
pub fn text2c(
    source: &Path,
    output_dir: Option<&Path>,
    symbol: Option<&str>,
) -> Result<WrittenPair> {
    embed_to_directory(source, output_dir, symbol, Encoding::Text)
}

pub fn embed_to_directory(
    source: &Path,
    output_dir: Option<&Path>,
    symbol: Option<&str>,
    encoding: Encoding,
) -> Result<WrittenPair> {
    let embedder = Embedder::new();
    let pair = embedder.generate_pair(source, symbol, encoding)?;
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_dir(source));
    embedder.write_pair(&pair, &dir)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| EmbedError::io(parent, err))?;
        }
    }
    fs::write(path, contents).map_err(|err| EmbedError::io(path, err))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote generated source");
    Ok(())
}
