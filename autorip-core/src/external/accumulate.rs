//! Folds a line sequence into a typed operation result.
//!
//! Each accumulator consumes a sequence of parsed-line-or-error elements in
//! order. Recoverable per-line parse failures are logged and skipped; the
//! first fatal error (source read, process exit, cancellation) becomes the
//! operation's error once the sequence ends. Every successfully parsed line
//! is also handed to the caller's observer, which is how progress and
//! message telemetry reach a UI without becoming accumulator state.

use crate::error::{CoreError, CoreResult};
use crate::model::{Disc, Drive};
use crate::protocol::Line;

/// Collects the drives reported by `DRV` lines, in the order encountered.
/// Drives with an empty drive name are not present and are filtered out.
/// Zero drives is a legitimate result, not an error.
pub fn collect_drives<I, F>(lines: I, mut on_line: F) -> CoreResult<Vec<Drive>>
where
    I: IntoIterator<Item = CoreResult<Line>>,
    F: FnMut(&Line),
{
    let mut drives = Vec::new();
    let mut fatal = None;
    for item in lines {
        match item {
            Ok(line) => {
                on_line(&line);
                if let Line::DriveScan(scan) = &line {
                    if !scan.drive_name.is_empty() {
                        drives.push(Drive::from(scan));
                    }
                }
            }
            Err(err) => record_error(&mut fatal, err),
        }
    }

    finish(fatal, drives)
}

/// Folds disc, title, and stream attributes into a [`Disc`], creating titles
/// and streams sparsely as their indices first appear. A disc with zero
/// titles is valid and signals that nothing is rippable.
pub fn collect_disc<I, F>(lines: I, mut on_line: F) -> CoreResult<Disc>
where
    I: IntoIterator<Item = CoreResult<Line>>,
    F: FnMut(&Line),
{
    let mut disc = Disc::default();
    let mut fatal = None;
    for item in lines {
        match item {
            Ok(line) => {
                on_line(&line);
                match line {
                    Line::DiscInfo(attr) => disc.info.push(attr),
                    Line::TitleInfo(info) => {
                        disc.title_mut(info.title_index).info.push(info.attr);
                    }
                    Line::StreamInfo(info) => {
                        disc.title_mut(info.title_index)
                            .stream_mut(info.stream_index)
                            .info
                            .push(info.attr);
                    }
                    // Progress and message lines are telemetry for the
                    // observer, not disc state.
                    _ => {}
                }
            }
            Err(err) => record_error(&mut fatal, err),
        }
    }

    finish(fatal, disc)
}

/// Drains a sequence to completion, surfacing only its first fatal error.
/// Used by backup commands, whose output is pure telemetry.
pub fn drain<I, F>(lines: I, mut on_line: F) -> CoreResult<()>
where
    I: IntoIterator<Item = CoreResult<Line>>,
    F: FnMut(&Line),
{
    let mut fatal = None;
    for item in lines {
        match item {
            Ok(line) => on_line(&line),
            Err(err) => record_error(&mut fatal, err),
        }
    }

    finish(fatal, ())
}

fn record_error(fatal: &mut Option<CoreError>, err: CoreError) {
    if !err.is_fatal() {
        log::warn!("{err}");
    } else if fatal.is_none() {
        *fatal = Some(err);
    } else {
        log::debug!("suppressed subsequent fatal error: {err}");
    }
}

fn finish<T>(fatal: Option<CoreError>, result: T) -> CoreResult<T> {
    match fatal {
        Some(err) => Err(err),
        None => Ok(result),
    }
}
