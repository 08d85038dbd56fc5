//! Shared testing utilities for vibecoder CLI tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `vibecoder` binary.
    ///
    /// The command runs in the isolated working directory with no API key in
    /// its environment, so tests are hermetic by default.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vibecoder").expect("Failed to locate vibecoder binary");
        cmd.current_dir(self.work_dir()).env_remove("GEMINI_API_KEY");
        cmd
    }

    /// Write a `vibecoder.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir().join("vibecoder.toml"), content)
            .expect("Failed to write vibecoder.toml");
    }
}
