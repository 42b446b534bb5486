//! Core library for automating disc rips with makemkvcon.
//!
//! This crate drives the external `makemkvcon` tool, incrementally parses its
//! machine-readable (`-r`) output into typed [`protocol::Line`] events,
//! assembles those events into a [`model::Disc`] of titles and streams, and
//! scores titles with a weighted set of [`heuristics`] to pick the best one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use autorip_core::{CancelToken, Makemkvcon, MakemkvConfig};
//! use autorip_core::heuristics::{default_heuristics, find_best_titles};
//!
//! let config = MakemkvConfig::default();
//! let con = Makemkvcon::new(config).unwrap();
//! let cancel = CancelToken::new();
//!
//! let drives = con.list_drives(&cancel, |_line| {}).unwrap();
//! let disc = con.scan_drive(drives[0].index, &cancel, |_line| {}).unwrap();
//!
//! let best = find_best_titles(&disc, &default_heuristics());
//! println!("best titles: {:?}", best.iter().map(|t| t.index).collect::<Vec<_>>());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod heuristics;
pub mod model;
pub mod protocol;
pub mod utils;

// Re-exports for public API
pub use config::MakemkvConfig;
pub use error::{CoreError, CoreResult};
pub use external::{CancelToken, LineStream, Makemkvcon};
pub use model::{Disc, Drive, Info, Stream, Title};
pub use protocol::{parse_lines, Attr, Line, ParseError};
