//! C source templates for the declaration (header) and definition blocks.
//!
//! Both blocks agree on symbol names and constness: the pointer is
//! `const <T> *<symbol>` and the size is `const size_t <symbol>_size`.

/// Name of the file-local array holding the embedded bytes
pub const DATA_ARRAY: &str = "_data";

/// Renders the header and source blocks around an initializer
pub struct CSourceFormatter;

impl CSourceFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Header exposing `<symbol>` and `<symbol>_size` with C linkage
    pub fn format_declaration(&self, symbol: &str, element_type: &str) -> String {
        format!(
            "#pragma once\n\
             \n\
             #include <stddef.h>\n\
             \n\
             #ifdef __cplusplus\n\
             extern \"C\" {{\n\
             #endif\n\
             \n\
             extern const {element_type} *{symbol};\n\
             extern const size_t {symbol}_size;\n\
             \n\
             #ifdef __cplusplus\n\
             }}\n\
             #endif\n"
        )
    }

    /// Source defining the static array and both public symbols.
    ///
    /// `terminator_len` is subtracted from `sizeof` so the size constant
    /// covers only the file contents.
    pub fn format_definition(
        &self,
        symbol: &str,
        element_type: &str,
        initializer: &str,
        terminator_len: usize,
    ) -> String {
        let size_adjust = match terminator_len {
            0 => String::new(),
            n => format!(" - {n}"),
        };

        format!(
            "#include <stddef.h>\n\
             \n\
             static const {element_type} {DATA_ARRAY}[] = {initializer};\n\
             \n\
             const {element_type} *{symbol} = {DATA_ARRAY};\n\
             const size_t {symbol}_size = sizeof({DATA_ARRAY}){size_adjust};\n"
        )
    }
}

impl Default for CSourceFormatter {
    fn default() -> Self {
        Self::new()
    }
}
