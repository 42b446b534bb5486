use super::Info;
use crate::protocol::{Attr, StreamKind};

/// A video, audio, or subtitles stream. A [`Title`](super::Title) is made up
/// of multiple streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stream {
    /// Index assigned by makemkv.
    pub index: usize,

    pub info: Info,
}

impl Stream {
    pub(crate) fn new(index: usize) -> Self {
        Stream {
            index,
            info: Info::default(),
        }
    }

    /// Returns the kind of the stream, if its type attribute is present and
    /// recognized.
    pub fn kind(&self) -> Option<StreamKind> {
        StreamKind::from_code(self.info.code_or(Attr::Type, 0))
    }
}
