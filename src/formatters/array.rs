use std::str::Utf8Error;

/// Bytes per row in binary initializers
pub const BYTES_PER_ROW: usize = 16;

/// Renders file contents as a C array initializer
pub trait ArrayFormatter {
    /// Element type of the generated array (e.g. `unsigned char`)
    fn element_type(&self) -> &'static str;

    /// Bytes the compiler appends to the array beyond the file contents
    fn terminator_len(&self) -> usize {
        0
    }

    /// Initializer expression placed after `_data[] = `
    fn format_initializer(&self, contents: &[u8]) -> Result<String, Utf8Error>;
}

/// `{ 0x.., ... }` initializer, sixteen bytes per row
pub struct BinaryFormatter;

impl BinaryFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BinaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayFormatter for BinaryFormatter {
    fn element_type(&self) -> &'static str {
        "unsigned char"
    }

    fn format_initializer(&self, contents: &[u8]) -> Result<String, Utf8Error> {
        if contents.is_empty() {
            return Ok("{}".to_string());
        }

        // "0xff, " is the widest token
        let mut output = String::with_capacity(contents.len() * 6 + 4);
        output.push_str("{\n");
        for row in contents.chunks(BYTES_PER_ROW) {
            output.push_str("  ");
            for (i, byte) in row.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                output.push_str(&format!("{byte:#x}"));
            }
            output.push_str(",\n");
        }
        output.push('}');
        Ok(output)
    }
}

/// Adjacent string literals, one per source line
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayFormatter for TextFormatter {
    fn element_type(&self) -> &'static str {
        "char"
    }

    fn terminator_len(&self) -> usize {
        1
    }

    fn format_initializer(&self, contents: &[u8]) -> Result<String, Utf8Error> {
        let text = std::str::from_utf8(contents)?;

        let mut output = String::with_capacity(text.len() + text.len() / 8 + 2);
        output.push('"');
        for ch in text.chars() {
            match ch {
                '\\' => output.push_str("\\\\"),
                '"' => output.push_str("\\\""),
                '\r' => output.push_str("\\r"),
                '\n' => output.push_str("\\n\"\n\""),
                _ => output.push(ch),
            }
        }
        output.push('"');
        Ok(output)
    }
}
