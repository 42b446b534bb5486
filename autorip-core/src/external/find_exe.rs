//! Automatic discovery of the makemkvcon executable.

use crate::error::{CoreError, CoreResult};
use std::env;
use std::path::PathBuf;

#[cfg(windows)]
const EXE_NAMES: &[&str] = &["makemkvcon64.exe", "makemkvcon.exe"];

#[cfg(not(windows))]
const EXE_NAMES: &[&str] = &["makemkvcon"];

/// Locates the makemkvcon executable by searching `PATH` and the
/// conventional install locations for the current platform.
pub fn find_exe() -> CoreResult<PathBuf> {
    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            for name in EXE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }
    }

    for candidate in default_locations() {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(CoreError::Config(
        "makemkvcon executable not found; set its path explicitly".to_string(),
    ))
}

#[cfg(target_os = "macos")]
fn default_locations() -> Vec<PathBuf> {
    vec![PathBuf::from(
        "/Applications/MakeMKV.app/Contents/MacOS/makemkvcon",
    )]
}

#[cfg(windows)]
fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    for var in ["ProgramFiles", "ProgramFiles(x86)"] {
        if let Some(base) = env::var_os(var) {
            for name in EXE_NAMES {
                locations.push(PathBuf::from(&base).join("MakeMKV").join(name));
            }
        }
    }
    locations
}

#[cfg(not(any(target_os = "macos", windows)))]
fn default_locations() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/bin/makemkvcon"),
        PathBuf::from("/usr/local/bin/makemkvcon"),
        PathBuf::from("/opt/makemkv/bin/makemkvcon"),
    ]
}
