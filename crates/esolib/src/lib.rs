//! # esolib
//!
//! Native helpers exposed to an embedded Lua 5.1 runtime.
//!
//! This crate provides:
//! - The Id64 codec: 64-bit identifiers carried through Lua numbers by bit
//!   pattern rather than by value
//! - The addon loader: manifest driven loading of Lua files with per-file
//!   failure isolation
//! - Registration of both into an `mlua::Lua` state
//!
//! ## Addon Structure
//!
//! An addon is a directory containing a manifest file that lists Lua files,
//! one per line, relative to the manifest:
//!
//! ```text
//! ## MyAddon
//! ; lines starting with '#' or ';' are comments
//! lib/util.lua
//! MyAddon.lua
//! textures/icon.dds
//! ```
//!
//! Entries not ending in `.lua` are skipped without error.

pub mod config;
pub mod error;
pub mod id64;
pub mod loader;
pub mod lua;

pub use config::{EsoConfig, NumberPolicy};
pub use error::{EsoError, EsoResult};
pub use id64::Id64;
pub use loader::{AddonLoader, EntryFailure, LoadReport, ResolvedPath, ScriptHost};

// Re-export mlua for hosts embedding the library
pub use mlua;
