use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text used by most search tests: lines 1 and 3 contain "hello" in some case.
pub const SAMPLE: &str = "Hello World\nno match here\nHELLO again";

/// A temporary directory with its own config file, so tests never pick up
/// the per-user configuration.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new temp directory containing a default `config.toml`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let project = Self { dir };
        project.write_config("");
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent dirs as needed.
    pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full = self.dir.path().join(relative_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&full, content).expect("failed to write file");
        full
    }

    /// Write the sample search fixture and return its path.
    pub fn write_sample(&self) -> PathBuf {
        self.write_file("sample.txt", SAMPLE)
    }

    /// Replace the project config with the given TOML.
    pub fn write_config(&self, toml: &str) {
        self.write_file("config.toml", toml);
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Return the path to the keyword-search binary (built via cargo).
    pub fn bin() -> PathBuf {
        // assert_cmd finds the binary automatically via cargo
        PathBuf::from(env!("CARGO_BIN_EXE_keyword-search"))
    }

    /// A command for the binary that uses this project's config file.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(Self::bin());
        cmd.env_remove("KEYWORD_SEARCH_CONFIG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}
