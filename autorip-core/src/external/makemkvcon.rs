//! The makemkvcon command runner and its three operations.

use super::accumulate;
use super::find_exe::find_exe;
use super::process::{self, CancelToken, LineStream};
use crate::config::MakemkvConfig;
use crate::error::CoreResult;
use crate::model::{Disc, Drive};
use crate::protocol::Line;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TOOL_NAME: &str = "makemkvcon";

/// A drive index that is unlikely to exist. Probing it makes `info`
/// terminate quickly after drive enumeration, which has no end marker of
/// its own.
const OUT_OF_RANGE_DRIVE: usize = 9999;

/// Runs makemkvcon commands and folds their output into typed results.
pub struct Makemkvcon {
    config: MakemkvConfig,
    exe_path: PathBuf,
    default_args: Vec<String>,
}

impl Makemkvcon {
    /// Builds a runner from the given configuration. If no executable path
    /// is configured, the executable is located automatically.
    pub fn new(mut config: MakemkvConfig) -> CoreResult<Self> {
        let exe_path = match config.exe_path.clone() {
            Some(path) => path,
            None => find_exe()?,
        };
        config.exe_path = Some(exe_path.clone());
        config.validate()?;

        // -r selects machine-readable output; everything in this crate
        // depends on it.
        let mut default_args = vec![
            format!("--minlength={}", config.min_length_secs),
            "-r".to_string(),
        ];
        if let Some(profile) = &config.profile_path {
            default_args.push(format!("--profile={}", profile.display()));
        }

        Ok(Makemkvcon {
            config,
            exe_path,
            default_args,
        })
    }

    /// Returns the list of drives detected by makemkvcon. Zero drives is a
    /// valid result; the caller decides policy when there is not exactly
    /// one. `on_line` observes every parsed output line.
    pub fn list_drives<F>(&self, cancel: &CancelToken, on_line: F) -> CoreResult<Vec<Drive>>
    where
        F: FnMut(&Line),
    {
        let stream = self.run_command(
            cancel,
            ["info".to_string(), format!("disc:{OUT_OF_RANGE_DRIVE}")],
        )?;

        accumulate::collect_drives(stream, on_line)
    }

    /// Returns information about the disc in the given drive. The drive
    /// index should be obtained from [`Makemkvcon::list_drives`].
    pub fn scan_drive<F>(
        &self,
        drive_index: usize,
        cancel: &CancelToken,
        on_line: F,
    ) -> CoreResult<Disc>
    where
        F: FnMut(&Line),
    {
        let stream = self.run_command(cancel, ["info".to_string(), format!("disc:{drive_index}")])?;

        accumulate::collect_disc(stream, on_line)
    }

    /// Backs up one title of the disc in the given drive into `dst_dir`,
    /// creating the directory if necessary. The ripped file keeps the name
    /// makemkv gives it; moving or renaming it afterwards is the caller's
    /// responsibility.
    pub fn backup_title<F>(
        &self,
        drive_index: usize,
        title_index: usize,
        dst_dir: &Path,
        cancel: &CancelToken,
        on_line: F,
    ) -> CoreResult<()>
    where
        F: FnMut(&Line),
    {
        fs::create_dir_all(dst_dir)?;

        let stream = self.run_command(
            cancel,
            [
                "mkv".to_string(),
                "--decrypt".to_string(),
                format!("--cache={}", self.config.cache_size_mib),
                "--noscan".to_string(),
                "--progress=-same".to_string(),
                format!("disc:{drive_index}"),
                title_index.to_string(),
                dst_dir.display().to_string(),
            ],
        )?;

        accumulate::drain(stream, on_line)
    }

    /// Runs an arbitrary makemkvcon command with the default arguments
    /// (`-r`, `--minlength`, and `--profile` if configured) prepended,
    /// returning the lazy stream of parsed output lines.
    pub fn run_command<I, S>(&self, cancel: &CancelToken, args: I) -> CoreResult<LineStream>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.exe_path);
        command.args(&self.default_args).args(args);
        process::spawn(command, TOOL_NAME, cancel)
    }
}
