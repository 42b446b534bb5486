// autorip-cli/src/commands/scan.rs
//
// Implements the `scan` command: scan a disc and print its titles, marking
// the ones the heuristics would pick.

use crate::cli::{Cli, ScanArgs};
use crate::commands::{heuristics_with_weights, makemkvcon, select_drive};
use crate::progress::ProgressView;
use autorip_core::heuristics::{find_best_titles, Heuristic};
use autorip_core::protocol::StreamKind;
use autorip_core::utils::format_duration;
use autorip_core::{Attr, CancelToken, Disc, Title};
use console::style;
use std::collections::HashSet;
use std::error::Error;

pub fn run_scan(cli: &Cli, args: &ScanArgs) -> Result<(), Box<dyn Error>> {
    let con = makemkvcon(cli)?;
    let cancel = CancelToken::new();
    let drive = select_drive(&con, &cancel, args.drive)?;

    log::info!("Scanning drive {} ({})", drive.index, drive.drive_name);
    let view = ProgressView::new();
    let disc = con.scan_drive(drive.index, &cancel, |line| view.observe(line))?;
    view.finish();

    print_disc(&disc, &heuristics_with_weights(&args.weights));

    Ok(())
}

/// Returns a human-readable name for the disc, preferring the metadata name
/// over the volume label.
pub fn disc_name<'a>(disc: &'a Disc, fallback: &'a str) -> &'a str {
    disc.info
        .attr_or(Attr::Name, disc.info.attr_or(Attr::VolumeName, fallback))
}

fn print_disc(disc: &Disc, heuristics: &[Heuristic]) {
    println!("{}", style(disc_name(disc, "(unnamed disc)")).bold());

    if disc.title_count() == 0 {
        println!("No titles of at least the minimum length were found.");
        return;
    }

    let best: HashSet<usize> = find_best_titles(disc, heuristics)
        .iter()
        .map(|t| t.index)
        .collect();

    for title in &disc.titles {
        let marker = if best.contains(&title.index) { "*" } else { " " };
        println!("{} {}", marker, describe_title(title));
    }
    println!("\n* = best title per the current heuristic weights");
}

fn describe_title(title: &Title) -> String {
    let duration = title
        .info
        .attr_duration(Attr::Duration)
        .map(format_duration)
        .unwrap_or_else(|_| "unknown".to_string());
    let chapters = title.info.attr_int(Attr::ChapterCount).unwrap_or(0);

    let count_kind = |kind: StreamKind| {
        title
            .streams
            .iter()
            .filter(|s| s.kind() == Some(kind))
            .count()
    };

    format!(
        "{:>3}  {:>10}  {:>3} chapters  {} video / {} audio / {} subtitle  {}",
        title.index,
        duration,
        chapters,
        count_kind(StreamKind::Video),
        count_kind(StreamKind::Audio),
        count_kind(StreamKind::Subtitles),
        title.info.attr_or(Attr::OutputFileName, ""),
    )
}
