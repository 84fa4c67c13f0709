//! Fixture helpers shared by the engine's unit tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Bytes of a minimal class file defining `internal_name` (`org/pkg/Foo`).
pub fn class_bytes(internal_name: &str) -> Vec<u8> {
    let name_len = u16::try_from(internal_name.len()).unwrap();
    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    out.extend_from_slice(&[0, 0, 0, 61]);
    out.extend_from_slice(&3u16.to_be_bytes());
    out.push(1);
    out.extend_from_slice(&name_len.to_be_bytes());
    out.extend_from_slice(internal_name.as_bytes());
    out.push(7);
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&0x0021u16.to_be_bytes());
    out.extend_from_slice(&2u16.to_be_bytes());
    out
}

/// Write `<root>/<internal_name>.class` and return its path.
pub fn write_class(root: &Path, internal_name: &str) -> PathBuf {
    let path = root.join(format!("{internal_name}.class"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, class_bytes(internal_name)).unwrap();
    path
}

/// Write a file that is not a class file.
pub fn write_garbage(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"definitely not bytecode").unwrap();
    path
}
