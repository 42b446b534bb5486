//! Configuration for invoking makemkvcon.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

/// Default `--cache` value in MiB passed to backup commands.
pub const DEFAULT_CACHE_SIZE_MIB: u32 = 1024;

/// Default `--minlength` value in seconds. Filters out titles with video
/// shorter than this, which weeds out trailers and menus.
pub const DEFAULT_MIN_LENGTH_SECS: u32 = 1800;

/// Configuration for the makemkvcon process runner.
#[derive(Debug, Clone)]
pub struct MakemkvConfig {
    /// Path to the makemkvcon executable. When `None`, the executable is
    /// located automatically at construction time.
    pub exe_path: Option<PathBuf>,

    /// Path to a makemkv profile XML file. makemkvcon relies on it for the
    /// app_DefaultSelectionString setting, which determines what streams
    /// (video, audio, and subtitles) are selected by default.
    pub profile_path: Option<PathBuf>,

    /// Read cache size in MiB, passed with `--cache` to backup commands.
    pub cache_size_mib: u32,

    /// Minimum title length in seconds, passed with `--minlength`.
    pub min_length_secs: u32,
}

impl Default for MakemkvConfig {
    fn default() -> Self {
        MakemkvConfig {
            exe_path: None,
            profile_path: None,
            cache_size_mib: DEFAULT_CACHE_SIZE_MIB,
            min_length_secs: DEFAULT_MIN_LENGTH_SECS,
        }
    }
}

impl MakemkvConfig {
    /// Returns an error if the configuration is invalid. The executable path
    /// must be set and exist by the time this is called.
    pub fn validate(&self) -> CoreResult<()> {
        match &self.exe_path {
            None => {
                return Err(CoreError::Config(
                    "makemkvcon executable path is not set".to_string(),
                ));
            }
            Some(path) if !path.is_file() => {
                return Err(CoreError::Config(format!(
                    "makemkvcon executable {:?} not found",
                    path
                )));
            }
            Some(_) => {}
        }

        if let Some(profile) = &self.profile_path {
            if !profile.is_file() {
                return Err(CoreError::Config(format!(
                    "profile file {:?} not found",
                    profile
                )));
            }
        }

        if self.cache_size_mib < 1 {
            return Err(CoreError::Config(
                "cache size must be at least 1 MiB".to_string(),
            ));
        }

        if self.min_length_secs < 1 {
            return Err(CoreError::Config(
                "minimum title length must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_validate_requires_exe() {
        let config = MakemkvConfig::default();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_missing_profile() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let exe = dir.path().join("makemkvcon");
        File::create(&exe)?;

        let config = MakemkvConfig {
            exe_path: Some(exe),
            profile_path: Some(dir.path().join("missing.xml")),
            ..MakemkvConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_validate_ok() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let exe = dir.path().join("makemkvcon");
        File::create(&exe)?;

        let config = MakemkvConfig {
            exe_path: Some(exe),
            ..MakemkvConfig::default()
        };
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_validate_zero_cache() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let exe = dir.path().join("makemkvcon");
        File::create(&exe)?;

        let config = MakemkvConfig {
            exe_path: Some(exe),
            cache_size_mib: 0,
            ..MakemkvConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
        Ok(())
    }
}
