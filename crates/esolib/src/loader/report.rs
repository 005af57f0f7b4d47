//! Outcome of a load call.

use super::path::ResolvedPath;
use crate::error::EsoError;

/// A Lua file that failed to load or run.
#[derive(Debug)]
pub struct EntryFailure {
    /// Manifest line the entry came from, if loaded through a manifest.
    pub line_number: Option<usize>,

    /// Resolved path of the file.
    pub path: ResolvedPath,

    /// What went wrong.
    pub error: EsoError,
}

/// Aggregate status plus per-entry diagnostics.
///
/// For manifests `success` only says the manifest was opened; check
/// `failures` for the files it lists.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Value returned across the Lua boundary.
    pub success: bool,

    /// Resolved input path, if resolution succeeded.
    pub resolved: Option<ResolvedPath>,

    /// Files handed to the script host, in order.
    pub attempted: Vec<ResolvedPath>,

    /// Files that failed, in order.
    pub failures: Vec<EntryFailure>,

    /// Error that stopped the call before any file was loaded.
    pub error: Option<EsoError>,
}

impl LoadReport {
    pub(crate) fn failed(resolved: Option<ResolvedPath>, error: EsoError) -> Self {
        Self {
            success: false,
            resolved,
            error: Some(error),
            ..Self::default()
        }
    }

    /// Number of attempted files that loaded and ran.
    pub fn loaded_count(&self) -> usize {
        self.attempted.len() - self.failures.len()
    }

    /// True when the call succeeded and every attempted file loaded.
    pub fn is_clean(&self) -> bool {
        self.success && self.failures.is_empty()
    }
}
