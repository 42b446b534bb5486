// autorip-cli/src/commands/drives.rs
//
// Implements the `drives` command: list optical drives visible to makemkvcon.

use crate::cli::Cli;
use crate::commands::{log_messages, makemkvcon};
use autorip_core::CancelToken;
use console::style;
use std::error::Error;

pub fn run_drives(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let con = makemkvcon(cli)?;
    let cancel = CancelToken::new();

    log::info!("Probing for optical drives...");
    let drives = con.list_drives(&cancel, log_messages)?;

    if drives.is_empty() {
        println!("No optical drives detected.");
        return Ok(());
    }

    println!(
        "{:>5}  {:<40}  {:<30}  {}",
        style("INDEX").bold(),
        style("DRIVE").bold(),
        style("DISC").bold(),
        style("VOLUME").bold()
    );
    for drive in &drives {
        println!(
            "{:>5}  {:<40}  {:<30}  {}",
            drive.index, drive.drive_name, drive.disc_title, drive.volume_name
        );
    }

    Ok(())
}
