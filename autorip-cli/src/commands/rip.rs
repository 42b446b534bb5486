// autorip-cli/src/commands/rip.rs
//
// Implements the `rip` command: scan a disc, pick the best title (or honor
// an explicit choice), and back it up into a per-disc output directory.

use crate::cli::{Cli, RipArgs};
use crate::commands::scan::disc_name;
use crate::commands::{heuristics_with_weights, makemkvcon, select_drive};
use crate::progress::ProgressView;
use autorip_core::heuristics::find_best_titles;
use autorip_core::utils::sanitize_file_name;
use autorip_core::{CancelToken, Disc};
use console::style;
use std::error::Error;

pub fn run_rip(cli: &Cli, args: &RipArgs) -> Result<(), Box<dyn Error>> {
    let con = makemkvcon(cli)?;
    let cancel = CancelToken::new();
    let drive = select_drive(&con, &cancel, args.drive)?;

    log::info!("Scanning drive {} ({})", drive.index, drive.drive_name);
    let view = ProgressView::new();
    let disc = con.scan_drive(drive.index, &cancel, |line| view.observe(line))?;
    view.finish();

    if disc.title_count() == 0 {
        return Err("no titles of at least the minimum length were found".into());
    }

    let title_index = pick_title(&disc, args)?;
    let name = disc_name(&disc, &drive.volume_name);
    let dst_dir = args.output_dir.join(sanitize_file_name(name));

    log::info!(
        "Ripping title {} of {} to {}",
        title_index,
        name,
        dst_dir.display()
    );
    let view = ProgressView::new();
    con.backup_title(drive.index, title_index, &dst_dir, &cancel, |line| {
        view.observe(line)
    })?;
    view.finish();

    println!(
        "{} Ripped title {} to {}",
        style("Done.").green().bold(),
        title_index,
        dst_dir.display()
    );

    Ok(())
}

/// Resolves which title to rip. An explicit `--title` wins; otherwise the
/// heuristics must single out exactly one title.
fn pick_title(disc: &Disc, args: &RipArgs) -> Result<usize, Box<dyn Error>> {
    if let Some(index) = args.title {
        if index >= disc.title_count() {
            return Err(format!(
                "title {index} does not exist; disc has titles 0..{}",
                disc.title_count()
            )
            .into());
        }
        return Ok(index);
    }

    let best = find_best_titles(disc, &heuristics_with_weights(&args.weights));
    match best.as_slice() {
        [] => Err("heuristics selected no title".into()),
        [title] => Ok(title.index),
        tied => {
            let indexes: Vec<String> = tied.iter().map(|t| t.index.to_string()).collect();
            Err(format!(
                "titles {} are tied; pick one with --title or adjust the weights",
                indexes.join(", ")
            )
            .into())
        }
    }
}
