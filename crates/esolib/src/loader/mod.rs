//! Addon loading.
//!
//! [`AddonLoader::load_addon`] resolves a manifest path, reads the manifest
//! and runs each listed Lua file through a [`ScriptHost`]. A file that fails
//! to load or run is recorded and skipped; the remaining files still load.
//! The call succeeds as soon as the manifest could be opened.

pub mod manifest;
pub mod path;
pub mod report;

pub use manifest::{read_manifest_lines, ManifestLine, MAX_LINE_LEN};
pub use path::{
    is_lua_file, is_relative_path, resolve_file_path, resolve_file_path_in, resolve_file_path_with,
    ResolvedPath,
};
pub use report::{EntryFailure, LoadReport};

use crate::config::EsoConfig;
use crate::error::{EsoError, EsoResult};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Something that can load and execute a Lua file.
pub trait ScriptHost {
    /// Load the file as a chunk and run it with no arguments.
    fn exec_file(&self, path: &Path) -> EsoResult<()>;
}

impl ScriptHost for mlua::Lua {
    fn exec_file(&self, path: &Path) -> EsoResult<()> {
        self.load(path).exec().map_err(|e| EsoError::EntryLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl<T: ScriptHost + ?Sized> ScriptHost for &T {
    fn exec_file(&self, path: &Path) -> EsoResult<()> {
        (**self).exec_file(path)
    }
}

/// Loads manifests and single Lua files into a script host.
pub struct AddonLoader<H> {
    host: H,
    config: EsoConfig,
    current_dir: fn() -> io::Result<PathBuf>,
}

impl<H: ScriptHost> AddonLoader<H> {
    /// Create a loader for the given host.
    pub fn new(host: H, config: EsoConfig) -> Self {
        Self {
            host,
            config,
            current_dir: std::env::current_dir,
        }
    }

    /// Override how the working directory is looked up for relative paths.
    pub fn with_current_dir(mut self, current_dir: fn() -> io::Result<PathBuf>) -> Self {
        self.current_dir = current_dir;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &EsoConfig {
        &self.config
    }

    /// Load every Lua file listed in the manifest at `manifest_path`.
    pub fn load_addon(&self, manifest_path: &str) -> LoadReport {
        let path = match resolve_file_path_with(manifest_path, self.current_dir) {
            Ok(path) => path,
            Err(e) => {
                warn!("{}", e);
                return LoadReport::failed(None, e);
            }
        };

        self.trace(format_args!("try open manifest file '{}'", path));
        let file = match File::open(path.as_path()) {
            Ok(file) => file,
            Err(source) => {
                let e = EsoError::ManifestNotFound {
                    path: path.to_string(),
                    source,
                };
                warn!("{}", e);
                return LoadReport::failed(Some(path), e);
            }
        };

        let mut report = LoadReport {
            success: true,
            ..LoadReport::default()
        };

        for line in read_manifest_lines(BufReader::new(file)) {
            let (line_number, line) = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading manifest '{}': {}", path, e);
                    break;
                }
            };

            let Some(reference) = line.entry() else {
                continue;
            };

            let target = path.sibling(reference);
            if let Err(error) = self.try_load(&target) {
                report.failures.push(EntryFailure {
                    line_number: Some(line_number),
                    path: target.clone(),
                    error,
                });
            }
            report.attempted.push(target);
        }

        debug!(
            "Loaded {} of {} files from manifest '{}'",
            report.loaded_count(),
            report.attempted.len(),
            path
        );
        report.resolved = Some(path);
        report
    }

    /// Load and run a single Lua file.
    pub fn load_lua_file(&self, file_path: &str) -> LoadReport {
        let path = match resolve_file_path_with(file_path, self.current_dir) {
            Ok(path) => path,
            Err(e) => {
                warn!("{}", e);
                return LoadReport::failed(None, e);
            }
        };

        if !path.is_lua_file() {
            let e = EsoError::NotLuaFile(path.to_string());
            debug!("{}", e);
            return LoadReport::failed(Some(path), e);
        }

        let mut report = LoadReport::default();
        match self.try_load(&path) {
            Ok(()) => report.success = true,
            Err(error) => report.failures.push(EntryFailure {
                line_number: None,
                path: path.clone(),
                error,
            }),
        }
        report.attempted.push(path.clone());
        report.resolved = Some(path);
        report
    }

    fn try_load(&self, path: &ResolvedPath) -> EsoResult<()> {
        self.trace(format_args!("try load Lua file '{}'", path));
        self.host.exec_file(path.as_path()).inspect_err(|e| {
            warn!("{}", e);
        })
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.config.debug_output {
            info!("{}", message);
        } else {
            debug!("{}", message);
        }
    }
}
