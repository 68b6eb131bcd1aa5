//! Scratch files for tests that stand in for a device node.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// A file under the temp directory, unique per test and process, removed on
/// drop even when the test fails.
pub(crate) struct ScratchNode {
    path: PathBuf,
}

impl ScratchNode {
    pub(crate) fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!("vmouse_{tag}_{}", std::process::id()));
        File::create(&path).unwrap();
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn open(&self) -> File {
        OpenOptions::new().write(true).open(&self.path).unwrap()
    }

    pub(crate) fn contents(&self) -> Vec<u8> {
        fs::read(&self.path).unwrap()
    }
}

impl Drop for ScratchNode {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
