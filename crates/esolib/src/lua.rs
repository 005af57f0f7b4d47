//! Registration of the library into a Lua state.
//!
//! Installs the Id64 functions as globals and the loader functions in a
//! global `eso` table:
//!
//! | Lua name                          | Rust function                          |
//! |-----------------------------------|----------------------------------------|
//! | `StringToId64(text)`              | [`id64::string_to_carrier`]            |
//! | `Id64ToString(carrier)`           | [`id64::carrier_to_string`]            |
//! | `CompareId64s(a, b)`              | [`id64::compare_carriers`]             |
//! | `CompareId64ToNumber(a, number)`  | [`id64::compare_carrier_to_number`]    |
//! | `eso.LoadAddon(manifest)`         | [`AddonLoader::load_addon`]            |
//! | `eso.LoadLuaFile(file)`           | [`AddonLoader::load_lua_file`]         |
//!
//! Loader functions never raise Lua errors; they return `false` instead.

use crate::config::EsoConfig;
use crate::id64;
use crate::loader::AddonLoader;
use mlua::{Lua, Table};

/// Name of the global table holding the loader functions.
pub const LIBRARY_NAME: &str = "eso";

/// Register all functions into `lua` and return the `eso` table.
pub fn register(lua: &Lua, config: EsoConfig) -> mlua::Result<Table> {
    let globals = lua.globals();

    globals.set(
        "StringToId64",
        lua.create_function(|_, text: String| Ok(id64::string_to_carrier(&text)))?,
    )?;
    globals.set(
        "Id64ToString",
        lua.create_function(|_, carrier: f64| Ok(id64::carrier_to_string(carrier)))?,
    )?;
    globals.set(
        "CompareId64s",
        lua.create_function(|_, (a, b): (f64, f64)| Ok(id64::compare_carriers(a, b)))?,
    )?;

    let policy = config.number_policy;
    globals.set(
        "CompareId64ToNumber",
        lua.create_function(move |_, (a, b): (f64, f64)| {
            Ok(id64::compare_carrier_to_number(a, b, policy))
        })?,
    )?;

    let eso = lua.create_table()?;

    let addon_config = config.clone();
    eso.set(
        "LoadAddon",
        lua.create_function(move |lua, path: String| {
            let loader = AddonLoader::new(lua, addon_config.clone());
            Ok(loader.load_addon(&path).success)
        })?,
    )?;
    eso.set(
        "LoadLuaFile",
        lua.create_function(move |lua, path: String| {
            let loader = AddonLoader::new(lua, config.clone());
            Ok(loader.load_lua_file(&path).success)
        })?,
    )?;

    globals.set(LIBRARY_NAME, eso.clone())?;
    Ok(eso)
}
