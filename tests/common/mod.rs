#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ct-lines binary.
#[macro_export]
macro_rules! ct_lines {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ct-lines"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, including parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".ct-lines.toml", content);
    }

    /// A small mixed-language project: 2 Rust files, 1 Python file.
    ///
    /// | file          | code | comment | blank |
    /// |---------------|------|---------|-------|
    /// | src/main.rs   | 3    | 2       | 1     |
    /// | src/util.rs   | 1    | 3       | 0     |
    /// | scripts/a.py  | 2    | 1       | 1     |
    pub fn create_sample_project(&self) {
        self.create_file("src/main.rs", RUST_MAIN);
        self.create_file("src/util.rs", RUST_UTIL);
        self.create_file("scripts/a.py", PYTHON_SCRIPT);
    }
}

pub const RUST_MAIN: &str = "\
// entry point
fn main() {
    /* greet */
    println!(\"hi\");

}
";

pub const RUST_UTIL: &str = "\
/*
 * helpers
 */
pub fn util() {}
";

pub const PYTHON_SCRIPT: &str = "\
# script
import os

print(os.name)
";
