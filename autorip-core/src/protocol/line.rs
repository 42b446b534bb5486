//! The nine line kinds of the makemkvcon output protocol.

use super::attr::Attr;
use super::fields::{expect_fields, parse_index, parse_int, split_fields};
use super::ParseError;

/// One parsed line of makemkvcon output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `DRV`: presence and identity of a disc drive.
    DriveScan(DriveScan),
    /// `MSG`: an informational logging line.
    Message(Message),
    /// `CINFO`: an attribute of the disc.
    DiscInfo(Attribute),
    /// `TINFO`: an attribute of one title.
    TitleInfo(TitleInfo),
    /// `SINFO`: an attribute of one stream of one title.
    StreamInfo(StreamInfo),
    /// `PRGT`: the name of the overall task being performed.
    CurrentTask(Task),
    /// `PRGC`: the name of the current sub-task.
    CurrentSubtask(Task),
    /// `PRGV`: progress bar values for the task and sub-task.
    ProgressBar(ProgressBar),
    /// `TCOUNT`: the number of titles found on the disc.
    TitleCount(usize),
}

impl Line {
    /// Parses one line of makemkvcon output. Leading and trailing whitespace
    /// is trimmed; the line must not contain a line terminator.
    pub fn parse(s: &str) -> Result<Line, ParseError> {
        let s = s.trim();
        let (keyword, payload) = s.split_once(':').ok_or(ParseError::NoSeparator)?;
        match keyword {
            "DRV" => DriveScan::parse(payload).map(Line::DriveScan),
            "MSG" => Message::parse(payload).map(Line::Message),
            "CINFO" => parse_attribute(payload, 0).map(|(_, attr)| Line::DiscInfo(attr)),
            "TINFO" => TitleInfo::parse(payload).map(Line::TitleInfo),
            "SINFO" => StreamInfo::parse(payload).map(Line::StreamInfo),
            "PRGT" => Task::parse(payload).map(Line::CurrentTask),
            "PRGC" => Task::parse(payload).map(Line::CurrentSubtask),
            "PRGV" => ProgressBar::parse(payload).map(Line::ProgressBar),
            "TCOUNT" => parse_index(payload).map(Line::TitleCount),
            other => Err(ParseError::UnhandledPrefix(other.to_string())),
        }
    }
}

/// A `DRV` line. Drives that are not present report an empty drive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveScan {
    pub index: usize,
    pub visible: i64,
    pub enabled: i64,
    pub flags: i64,
    pub drive_name: String,
    pub disc_title: String,
    pub volume_name: String,
}

impl DriveScan {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let fields = expect_fields(payload, 7)?;
        Ok(DriveScan {
            index: parse_index(&fields[0])?,
            visible: parse_int(&fields[1])?,
            enabled: parse_int(&fields[2])?,
            flags: parse_int(&fields[3])?,
            drive_name: fields[4].clone(),
            disc_title: fields[5].clone(),
            volume_name: fields[6].clone(),
        })
    }
}

/// A `MSG` line. The payload declares its own parameter count, so the total
/// field count is 5 plus that declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub code: i64,
    pub flags: i64,
    pub text: String,
    pub format: String,
    pub params: Vec<String>,
}

impl Message {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let fields = split_fields(payload)?;
        if fields.len() < 5 {
            return Err(ParseError::FieldCount {
                expected: 5,
                found: fields.len(),
            });
        }

        let num_params = parse_index(&fields[2])?;
        let expected = 5 + num_params;
        if fields.len() != expected {
            return Err(ParseError::FieldCount {
                expected,
                found: fields.len(),
            });
        }

        Ok(Message {
            code: parse_int(&fields[0])?,
            flags: parse_int(&fields[1])?,
            text: fields[3].clone(),
            format: fields[4].clone(),
            params: fields[5..].to_vec(),
        })
    }
}

/// The common tail of `CINFO`, `TINFO`, and `SINFO` lines: one attribute of
/// a disc, title, or stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Raw attribute id. Ids not named by [`Attr`] pass through unchanged.
    pub id: i64,

    /// An integer that corresponds to `value`, if `value` is an enumeration.
    pub code: i64,

    /// The value of the attribute identified by `id`.
    pub value: String,
}

impl Attribute {
    /// Reports whether this attribute carries the given [`Attr`] id.
    pub fn is(&self, attr: Attr) -> bool {
        self.id == attr.id()
    }
}

/// Parses `num_prefix` leading integer fields followed by an id, code, value
/// attribute triple.
fn parse_attribute(payload: &str, num_prefix: usize) -> Result<(Vec<usize>, Attribute), ParseError> {
    let fields = expect_fields(payload, num_prefix + 3)?;
    let prefix = fields[..num_prefix]
        .iter()
        .map(|f| parse_index(f))
        .collect::<Result<Vec<_>, _>>()?;

    let attr = Attribute {
        id: parse_int(&fields[num_prefix])?,
        code: parse_int(&fields[num_prefix + 1])?,
        value: fields[num_prefix + 2].clone(),
    };

    Ok((prefix, attr))
}

/// A `TINFO` line: one attribute of the title at `title_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub title_index: usize,
    pub attr: Attribute,
}

impl TitleInfo {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let (prefix, attr) = parse_attribute(payload, 1)?;
        Ok(TitleInfo {
            title_index: prefix[0],
            attr,
        })
    }
}

/// An `SINFO` line: one attribute of a stream of a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub title_index: usize,
    pub stream_index: usize,
    pub attr: Attribute,
}

impl StreamInfo {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let (prefix, attr) = parse_attribute(payload, 2)?;
        Ok(StreamInfo {
            title_index: prefix[0],
            stream_index: prefix[1],
            attr,
        })
    }
}

/// A `PRGT` or `PRGC` line: the name of the overall task or current sub-task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub code: i64,
    pub name: String,
}

impl Task {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let fields = expect_fields(payload, 3)?;
        Ok(Task {
            id: parse_int(&fields[0])?,
            code: parse_int(&fields[1])?,
            name: fields[2].clone(),
        })
    }
}

/// A `PRGV` line: progress counters for the current sub-task and the overall
/// task against a constant denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    /// Progress of the current sub-task.
    pub current: i64,

    /// Progress of the overall task.
    pub total: i64,

    /// Constant denominator used to calculate the progress percentage.
    pub max: i64,
}

impl ProgressBar {
    fn parse(payload: &str) -> Result<Self, ParseError> {
        let fields = expect_fields(payload, 3)?;
        Ok(ProgressBar {
            current: parse_int(&fields[0])?,
            total: parse_int(&fields[1])?,
            max: parse_int(&fields[2])?,
        })
    }

    /// Progress of the current sub-task as a fraction in 0.0..=1.0.
    pub fn current_fraction(&self) -> f64 {
        self.current as f64 / self.max as f64
    }

    /// Progress of the overall task as a fraction in 0.0..=1.0.
    pub fn total_fraction(&self) -> f64 {
        self.total as f64 / self.max as f64
    }
}
