mod common;

use common::{decode_hex, exported_symbols, hex_rows, initializer, write_source};
use embedc::core::{EmbedRequest, Embedder, Encoding, Mode};

fn definition_for(contents: &[u8]) -> (String, usize) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(dir.path(), "blob.bin", contents);
    let output = Embedder::new()
        .generate(&EmbedRequest::new(&path))
        .unwrap();
    assert_eq!(output.symbol, "blob");
    assert_eq!(output.encoding, Encoding::Binary);
    (output.text, output.byte_len)
}

#[test]
fn round_trips_row_boundaries() {
    for len in [0usize, 1, 16, 17] {
        let contents: Vec<u8> = (0..len).map(|i| (i * 37 % 256) as u8).collect();
        let (text, byte_len) = definition_for(&contents);

        assert_eq!(decode_hex(initializer(&text)), contents, "len {len}");
        assert_eq!(byte_len, len);
        assert!(text.ends_with("const size_t blob_size = sizeof(_data);\n"));
    }
}

#[test]
fn seventeen_bytes_spill_into_a_partial_row() {
    let contents = [0xabu8; 17];
    let (text, _) = definition_for(&contents);
    let rows = hex_rows(initializer(&text));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 16);
    assert_eq!(rows[1], vec!["0xab".to_string()]);
}

#[test]
fn empty_file_renders_empty_initializer() {
    let (text, byte_len) = definition_for(&[]);
    assert_eq!(initializer(&text), "{}");
    assert_eq!(byte_len, 0);
}

#[test]
fn full_definition_matches_expected_text() {
    let (text, _) = definition_for(&[0x00, 0x7f, 0x80, 0xff]);
    let expected = "#include <stddef.h>

static const unsigned char _data[] = {
  0x0, 0x7f, 0x80, 0xff,
};

const unsigned char *blob = _data;
const size_t blob_size = sizeof(_data);
";
    assert_eq!(text, expected);
}

#[test]
fn declaration_and_definition_agree_on_names() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(dir.path(), "icon.png", b"\x89PNG\r\n");
    let embedder = Embedder::new();

    let declaration = embedder
        .generate(&EmbedRequest::new(&path).with_mode(Mode::Declaration))
        .unwrap();
    let definition = embedder.generate(&EmbedRequest::new(&path)).unwrap();

    assert_eq!(exported_symbols(&declaration.text), vec!["icon", "icon_size"]);
    assert_eq!(
        exported_symbols(&declaration.text),
        exported_symbols(&definition.text)
    );
    assert!(declaration.text.contains("extern const unsigned char *icon;\n"));
    assert!(declaration.text.starts_with("#pragma once\n"));
    assert!(declaration.text.contains("extern \"C\" {"));
}

#[test]
fn explicit_symbol_overrides_file_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(dir.path(), "archive.tar.gz", &[1, 2, 3]);

    let derived = Embedder::new().generate(&EmbedRequest::new(&path)).unwrap();
    assert_eq!(derived.symbol, "archive.tar");

    let named = Embedder::new()
        .generate(&EmbedRequest::new(&path).with_symbol("foo"))
        .unwrap();
    assert_eq!(exported_symbols(&named.text), vec!["foo", "foo_size"]);
}

#[test]
fn missing_source_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let request = EmbedRequest::new(dir.path().join("nope.bin"));
    let err = Embedder::new().generate(&request).unwrap_err();

    assert!(matches!(err, embedc::EmbedError::Io { .. }));
    assert!(err.to_string().contains("nope.bin"));
}
