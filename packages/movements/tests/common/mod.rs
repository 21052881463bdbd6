#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    movements_test_support::logging::init();
}

/// Write `text` to `dir/file_name` and return the full path.
pub fn write_movement_file(dir: &Path, file_name: &str, text: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, text).expect("write movement file");
    path
}
