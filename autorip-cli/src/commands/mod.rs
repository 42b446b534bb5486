// autorip-cli/src/commands/mod.rs
//
// Command implementations and the helpers they share: building the core
// runner from global flags, drive selection policy, and weight overrides.

pub mod drives;
pub mod rip;
pub mod scan;

use crate::cli::{Cli, WeightArgs};
use autorip_core::heuristics::{default_heuristics, Heuristic};
use autorip_core::{CancelToken, Drive, Line, Makemkvcon, MakemkvConfig};
use std::error::Error;

/// Builds the makemkvcon runner from the global CLI flags.
pub fn makemkvcon(cli: &Cli) -> Result<Makemkvcon, Box<dyn Error>> {
    let config = MakemkvConfig {
        exe_path: cli.makemkvcon.clone(),
        profile_path: cli.profile.clone(),
        cache_size_mib: cli.cache,
        min_length_secs: cli.min_length,
    };

    Ok(Makemkvcon::new(config)?)
}

/// Picks the drive to operate on. With an explicit index the drive must be
/// present; otherwise there must be at least one drive, and extras beyond
/// the first are ignored with a warning.
pub fn select_drive(
    con: &Makemkvcon,
    cancel: &CancelToken,
    requested: Option<usize>,
) -> Result<Drive, Box<dyn Error>> {
    let mut drives = con.list_drives(cancel, log_messages)?;

    if let Some(index) = requested {
        return drives
            .into_iter()
            .find(|d| d.index == index)
            .ok_or_else(|| format!("drive {index} not found").into());
    }

    if drives.is_empty() {
        return Err("no drives found".into());
    }
    if drives.len() > 1 {
        log::warn!("multiple drives not supported yet; using the first drive only");
    }

    Ok(drives.remove(0))
}

/// Returns the standard heuristics with any CLI weight overrides applied.
pub fn heuristics_with_weights(args: &WeightArgs) -> Vec<Heuristic> {
    let mut heuristics = default_heuristics();
    for heuristic in &mut heuristics {
        let overridden = match heuristic.name {
            "longest" => args.longest_weight,
            "angle-one" => args.angle_one_weight,
            "most-chapters" => args.most_chapters_weight,
            "most-streams" => args.most_streams_weight,
            _ => None,
        };
        if let Some(weight) = overridden {
            heuristic.weight = weight;
        }
    }

    heuristics
}

/// Observer that routes makemkv MSG lines to the logger.
pub fn log_messages(line: &Line) {
    if let Line::Message(message) = line {
        log::debug!("makemkv: {}", message.text);
    }
}
