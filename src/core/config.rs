use std::collections::BTreeSet;
use std::path::Path;

use super::error::ScanError;

/// Directory names skipped by default: VCS metadata, build output and
/// vendored trees.
pub const DEFAULT_OMIT: [&str; 4] = [".git", "build", "_build", "third_party"];

/// Files larger than this are counted but not parsed.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 4 * 1024 * 1024;

/// Number of heavy emitters reported per language.
pub const DEFAULT_TOP_EMITTERS: usize = 10;

/// Settings for one extraction run. Passed by value into the analyzer so
/// concurrent runs never share an omit-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub omit: BTreeSet<String>,
    pub max_file_bytes: u64,
    pub threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            omit: DEFAULT_OMIT.iter().map(|name| name.to_string()).collect(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            threads: None,
        }
    }
}

impl ScanConfig {
    /// A configuration with an empty omit-set.
    pub fn without_omit() -> Self {
        Self {
            omit: BTreeSet::new(),
            ..Self::default()
        }
    }

    pub fn with_omit<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omit.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Reject configurations that cannot describe a scan. Called before any
    /// file is touched.
    pub fn validate(&self, root: &Path) -> Result<(), ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::RootNotDirectory(root.to_path_buf()));
        }
        for name in &self.omit {
            let is_segment = !name.is_empty()
                && name != "."
                && name != ".."
                && !name.contains(['/', '\\']);
            if !is_segment {
                return Err(ScanError::InvalidOmit(name.clone()));
            }
        }
        if self.threads == Some(0) {
            return Err(ScanError::WorkerPool("thread count must be at least 1".into()));
        }
        Ok(())
    }
}
