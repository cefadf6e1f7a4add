pub mod embedder;
pub mod error;
pub mod request;

pub use embedder::{
    bin2c, default_output_dir, embed_to_directory, text2c, EmbedOutput, EmbedPair, Embedder,
    WrittenPair,
};
pub use error::{EmbedError, Result};
pub use request::{derive_symbol, EmbedRequest, Encoding, Mode};
