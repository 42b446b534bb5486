//! Makemkvcon runner tests using a stand-in executable.

#![cfg(unix)]

use autorip_core::{CancelToken, CoreError, Makemkvcon, MakemkvConfig};
use std::path::PathBuf;
use tempfile::tempdir;

fn config_with_exe(exe: &str) -> MakemkvConfig {
    MakemkvConfig {
        exe_path: Some(PathBuf::from(exe)),
        ..MakemkvConfig::default()
    }
}

#[test]
fn test_new_rejects_missing_exe() {
    let result = Makemkvcon::new(config_with_exe("/nonexistent/makemkvcon"));
    assert!(matches!(result, Err(CoreError::Config(_))));
}

#[test]
fn test_backup_title_creates_destination_dir() -> Result<(), Box<dyn std::error::Error>> {
    // /bin/sh rejects the makemkvcon arguments and exits non-zero, but the
    // destination directory must exist before the process is spawned.
    let con = Makemkvcon::new(config_with_exe("/bin/sh"))?;
    let dir = tempdir()?;
    let dst = dir.path().join("Movie (2024)");

    let cancel = CancelToken::new();
    let result = con.backup_title(0, 1, &dst, &cancel, |_| {});

    assert!(result.is_err());
    assert!(dst.is_dir());
    Ok(())
}

#[test]
fn test_run_command_surfaces_exit_failure() -> Result<(), Box<dyn std::error::Error>> {
    let con = Makemkvcon::new(config_with_exe("/bin/sh"))?;
    let cancel = CancelToken::new();

    // sh chokes on the default --minlength argument and exits non-zero.
    let stream = con.run_command(&cancel, ["info", "disc:0"])?;
    let items: Vec<_> = stream.collect();
    assert!(items
        .iter()
        .any(|item| matches!(item, Err(CoreError::CommandFailed { .. }))));
    Ok(())
}
