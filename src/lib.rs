//! # embedc
//!
//! Embed arbitrary files into C and C++ builds.
//!
//! A source file becomes a pair of C artifacts: a header declaring
//! `const <T> *<symbol>` and `const size_t <symbol>_size`, and a source file
//! holding the contents in a static array. Build systems run it once per
//! resource instead of reading the file at runtime.
//!
//! ## Encodings
//!
//! - **Binary**: `unsigned char` array of hex literals, sixteen per row
//! - **Text**: `char` string literal, null-terminated, size excludes the terminator
//!
//! ```no_run
//! use embedc::core::{EmbedRequest, Embedder, Encoding};
//!
//! let request = EmbedRequest::new("shaders/blit.frag").with_encoding(Encoding::Text);
//! let output = Embedder::new().generate(&request)?;
//! println!("{}", output.as_str());
//! # Ok::<(), embedc::core::EmbedError>(())
//! ```

pub mod core;
pub mod formatters;

pub use crate::core::{bin2c, text2c, EmbedError, EmbedRequest, Embedder, Encoding, Mode};
