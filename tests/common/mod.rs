// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed manifest directory so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use saltern::cli::{GenerateOpts, GlobalOpts};
use saltern::logging::Logger;

/// An isolated manifest directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.  Generated
/// artifacts land in the same directory, mirroring how the tool is run
/// from a formula checkout.
pub struct ManifestDir {
    /// Temporary directory containing the manifest and generated output.
    pub root: tempfile::TempDir,
}

impl ManifestDir {
    /// Create a directory holding a `Saltfile` with the given content.
    pub fn new(manifest: &str) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::write(root.path().join("Saltfile"), manifest).expect("write Saltfile");
        Self { root }
    }

    /// Write a `saltern.toml` next to the manifest.
    pub fn with_layout(self, layout: &str) -> Self {
        std::fs::write(self.root.path().join("saltern.toml"), layout).expect("write saltern.toml");
        self
    }

    /// Path to the directory root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.path().join("Saltfile")
    }

    /// Global options pointing at this directory's manifest.
    pub fn global_opts(&self) -> GlobalOpts {
        GlobalOpts {
            manifest: self.manifest_path(),
        }
    }

    /// Generate options writing into this directory.
    pub fn generate_opts(&self, dry_run: bool) -> GenerateOpts {
        GenerateOpts {
            output: self.root.path().to_path_buf(),
            dry_run,
        }
    }

    /// Run the generate command against this directory.
    pub fn generate(&self, dry_run: bool) -> anyhow::Result<()> {
        let log = Logger::new(false);
        saltern::commands::generate::run(&self.global_opts(), &self.generate_opts(dry_run), &log)
    }

    /// Read a generated artifact relative to the directory root.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root.path().join(rel)).expect("read generated artifact")
    }

    /// `true` if the path exists relative to the directory root.
    pub fn exists(&self, rel: &str) -> bool {
        self.root.path().join(rel).exists()
    }

    /// Names of all entries in the directory root, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.root.path())
            .expect("read dir")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}
