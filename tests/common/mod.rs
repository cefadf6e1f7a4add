#![allow(dead_code)]

use regex::Regex;
use std::path::{Path, PathBuf};

/// Initializer text between `_data[] = ` and the terminating `;`
pub fn initializer(definition: &str) -> &str {
    let marker = "_data[] = ";
    let start = definition.find(marker).expect("missing _data array") + marker.len();
    let end = definition.rfind(";\n\nconst ").expect("missing end of array");
    &definition[start..end]
}

/// Bytes listed in a binary initializer, in row-major order
pub fn decode_hex(initializer: &str) -> Vec<u8> {
    let token = Regex::new(r"0x([0-9a-f]+)").unwrap();
    token
        .captures_iter(initializer)
        .map(|caps| u8::from_str_radix(&caps[1], 16).unwrap())
        .collect()
}

/// Rows of a binary initializer, each a list of hex tokens
pub fn hex_rows(initializer: &str) -> Vec<Vec<String>> {
    initializer
        .lines()
        .filter(|line| line.starts_with("  "))
        .map(|line| {
            line.trim()
                .trim_end_matches(',')
                .split(", ")
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Joins adjacent string literals and undoes the escapes, the way a C compiler would
pub fn decode_string_literal(initializer: &str) -> String {
    let mut out = String::new();
    let mut chars = initializer.chars();
    while let Some(c) = chars.next() {
        match c {
            '\n' | ' ' => continue,
            '"' => loop {
                match chars.next().expect("unterminated literal") {
                    '"' => break,
                    '\\' => match chars.next().expect("dangling escape") {
                        '\\' => out.push('\\'),
                        '"' => out.push('"'),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        other => panic!("unexpected escape \\{other}"),
                    },
                    '\n' => panic!("raw newline inside a literal"),
                    ch => out.push(ch),
                }
            },
            other => panic!("unexpected {other:?} between literals"),
        }
    }
    out
}

/// Pointer and size symbol names, in order of appearance
pub fn exported_symbols(block: &str) -> Vec<String> {
    let decl = Regex::new(r"(?m)^(?:extern )?const (?:unsigned char|char|size_t) \*?(\w[\w.]*)").unwrap();
    decl.captures_iter(block)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub fn write_source(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
