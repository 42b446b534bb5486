//! Parser for the machine-readable output protocol of makemkvcon.
//!
//! When run with `-r`, makemkvcon emits one event per line: a keyword prefix
//! (`DRV`, `MSG`, `CINFO`, ...) separated from a comma-separated payload by
//! the first `:`. String fields are double-quoted with doubled-quote
//! escaping. This module turns those lines into typed [`Line`] events.
//!
//! See https://makemkv.com/developers/usage.txt.

mod attr;
mod duration;
mod fields;
mod line;

pub use attr::{Attr, StreamKind};
pub use duration::parse_duration;
pub use line::{Attribute, DriveScan, Line, Message, ProgressBar, StreamInfo, Task, TitleInfo};

use crate::error::{CoreError, CoreResult};
use std::io::BufRead;
use thiserror::Error;

/// A failure to parse a single output line. The offending line itself is
/// attached by [`CoreError::LineParse`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no separator found")]
    NoSeparator,

    #[error("unhandled line prefix {0:?}")]
    UnhandledPrefix(String),

    #[error("expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("expected integer field, got {0:?}")]
    NonInteger(String),

    #[error("malformed quoted field")]
    MalformedQuote,
}

/// Returns a lazy iterator over the makemkvcon output lines read from `r`.
///
/// Each element is either a parsed [`Line`] or an error. A parse failure is
/// local to its line and does not end the iteration; only a read failure on
/// `r` does, and it is yielded as the final element.
pub fn parse_lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader,
        done: false,
    }
}

/// Iterator returned by [`parse_lines`].
pub struct Lines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = CoreResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let s = buf.trim_end_matches(['\n', '\r']);
                Some(Line::parse(s).map_err(|source| CoreError::LineParse {
                    line: s.to_string(),
                    source,
                }))
            }
            Err(err) => {
                self.done = true;
                Some(Err(CoreError::OutputRead(err)))
            }
        }
    }
}
