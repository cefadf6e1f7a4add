use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

use embedc::core::{EmbedRequest, Embedder, Encoding, Mode};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "embedc",
    version = "0.1.0",
    author = "embedc developers",
    about = "Generate C source embedding a file's contents as a static array"
)]
struct Cli {
    /// File to embed
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file path (standard output when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write both <symbol>.h and <symbol>.c into this directory
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        conflicts_with_all = ["output", "header"]
    )]
    output_dir: Option<PathBuf>,

    /// Global symbol for the embedded contents (defaults to the file name without extension)
    #[arg(short, long, value_name = "NAME")]
    symbol: Option<String>,

    /// Generate the declaration header instead of the definition
    #[arg(long)]
    header: bool,

    /// Embed as null-terminated text instead of bytes
    #[arg(short, long)]
    text: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // stdout may carry generated code, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        output_dir,
        symbol,
        header,
        text,
        verbose: _,
    } = cli;

    let encoding = if text { Encoding::Text } else { Encoding::Binary };
    let embedder = Embedder::new();

    if let Some(dir) = output_dir {
        let pair = embedder
            .generate_pair(&input, symbol.as_deref(), encoding)
            .with_context(|| format!("failed to embed {}", input.display()))?;
        let written = embedder
            .write_pair(&pair, &dir)
            .with_context(|| format!("failed to write output to {}", dir.display()))?;
        info!(
            header = %written.header_path.display(),
            source = %written.source_path.display(),
            "generated header and source"
        );
        return Ok(());
    }

    let mode = if header {
        Mode::Declaration
    } else {
        Mode::Definition
    };

    let mut request = EmbedRequest::new(&input)
        .with_mode(mode)
        .with_encoding(encoding);
    if let Some(symbol) = symbol {
        request = request.with_symbol(symbol);
    }
    if let Some(output) = output {
        request = request.with_destination(output);
    }

    let generated = embedder
        .run(&request)
        .with_context(|| format!("failed to embed {}", input.display()))?;
    info!(
        symbol = %generated.symbol,
        bytes = generated.byte_len,
        "embedded {}",
        input.display()
    );

    Ok(())
}
