//! Path resolution for manifests and Lua files.
//!
//! Paths are handled as text: relative inputs are joined onto the current
//! working directory and every backslash is turned into a forward slash, so
//! manifests written on either platform resolve the same way.

use crate::error::{EsoError, EsoResult};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix a file must carry to be loaded as Lua.
pub const LUA_SUFFIX: &str = ".lua";

/// An absolute, forward-slash normalized file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Directory part of the path, including the final `/`.
    ///
    /// Empty when the path has no separator.
    pub fn base_path(&self) -> &str {
        match self.0.rfind('/') {
            Some(index) => &self.0[..=index],
            None => "",
        }
    }

    /// Join a manifest-relative reference onto this path's directory.
    pub fn sibling(&self, reference: &str) -> ResolvedPath {
        ResolvedPath(format!("{}{}", self.base_path(), reference))
    }

    pub fn is_lua_file(&self) -> bool {
        is_lua_file(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a path is relative.
///
/// Absolute means a leading separator or a drive prefix like `C:\` / `C:/`.
pub fn is_relative_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [b'/' | b'\\', ..] => false,
        [_, b':', b'/' | b'\\', ..] => false,
        _ => true,
    }
}

/// Check for the `.lua` suffix. The suffix alone is not a file name.
pub fn is_lua_file(name: &str) -> bool {
    name.len() > LUA_SUFFIX.len() && name.ends_with(LUA_SUFFIX)
}

/// Resolve a path against the process working directory.
pub fn resolve_file_path(path: &str) -> EsoResult<ResolvedPath> {
    resolve_file_path_with(path, std::env::current_dir)
}

/// Resolve a path, asking `current_dir` for the working directory only when
/// the path is relative.
pub fn resolve_file_path_with<F>(path: &str, current_dir: F) -> EsoResult<ResolvedPath>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    if !is_relative_path(path) {
        return Ok(normalize(path.to_string()));
    }

    let cwd = current_dir().map_err(EsoError::PathResolution)?;
    Ok(resolve_file_path_in(path, &cwd.to_string_lossy()))
}

/// Resolve a path against an explicit working directory.
pub fn resolve_file_path_in(path: &str, cwd: &str) -> ResolvedPath {
    if is_relative_path(path) {
        let cwd = cwd.trim_end_matches(['/', '\\']);
        normalize(format!("{}/{}", cwd, path))
    } else {
        normalize(path.to_string())
    }
}

fn normalize(path: String) -> ResolvedPath {
    ResolvedPath(path.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_relative_path() {
        assert!(is_relative_path("addon/manifest.txt"));
        assert!(is_relative_path("manifest.txt"));
        assert!(is_relative_path("./manifest.txt"));
        assert!(is_relative_path(""));
        assert!(!is_relative_path("/home/user/addon.txt"));
        assert!(!is_relative_path("\\addons\\addon.txt"));
        assert!(!is_relative_path("C:\\addons\\addon.txt"));
        assert!(!is_relative_path("d:/addons/addon.txt"));
        // A drive letter without a separator is relative to that drive.
        assert!(is_relative_path("C:addon.txt"));
    }

    #[test]
    fn test_is_lua_file() {
        assert!(is_lua_file("main.lua"));
        assert!(is_lua_file("lib/util.lua"));
        assert!(!is_lua_file(".lua"));
        assert!(!is_lua_file("main.LUA"));
        assert!(!is_lua_file("main.lua.bak"));
        assert!(!is_lua_file("textures/icon.dds"));
        assert!(!is_lua_file(""));
    }

    #[test]
    fn test_resolve_relative() {
        let resolved = resolve_file_path_in("addon/manifest.txt", "/home/user");
        assert_eq!(resolved.as_str(), "/home/user/addon/manifest.txt");

        let resolved = resolve_file_path_in("manifest.txt", "/");
        assert_eq!(resolved.as_str(), "/manifest.txt");
    }

    #[test]
    fn test_resolve_absolute_untouched() {
        let resolved = resolve_file_path_in("/opt/addon/manifest.txt", "/home/user");
        assert_eq!(resolved.as_str(), "/opt/addon/manifest.txt");
    }

    #[test]
    fn test_resolve_normalizes_backslashes() {
        let resolved = resolve_file_path_in("addon\\lib\\util.lua", "C:\\games\\eso");
        assert_eq!(resolved.as_str(), "C:/games/eso/addon/lib/util.lua");

        let resolved = resolve_file_path_in("C:\\addons\\a.lua", "/ignored");
        assert_eq!(resolved.as_str(), "C:/addons/a.lua");
    }

    #[test]
    fn test_resolve_uses_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let resolved = resolve_file_path("manifest.txt").unwrap();
        let expected = format!("{}/manifest.txt", cwd.to_string_lossy().replace('\\', "/"));
        assert_eq!(resolved.as_str(), expected);
    }

    #[test]
    fn test_missing_working_directory() {
        let result = resolve_file_path_with("manifest.txt", || {
            Err(io::Error::new(io::ErrorKind::NotFound, "cwd removed"))
        });
        assert!(matches!(result, Err(EsoError::PathResolution(_))));

        // Absolute paths never need the working directory.
        let resolved = resolve_file_path_with("/opt/addon/manifest.txt", || {
            panic!("working directory requested for an absolute path")
        })
        .unwrap();
        assert_eq!(resolved.as_str(), "/opt/addon/manifest.txt");
    }

    #[test]
    fn test_base_path() {
        let resolved = resolve_file_path_in("/opt/addon/manifest.txt", "/");
        assert_eq!(resolved.base_path(), "/opt/addon/");
        assert_eq!(resolved.sibling("lib/a.lua").as_str(), "/opt/addon/lib/a.lua");

        let root = resolve_file_path_in("/manifest.txt", "/");
        assert_eq!(root.base_path(), "/");
    }
}
