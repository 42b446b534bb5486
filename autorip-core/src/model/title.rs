use super::{Info, Stream};

/// A collection of streams plus metadata, identified by an index number. A
/// [`Disc`](super::Disc) is made up of multiple titles.
///
/// Title numbering is assigned by makemkv and appears deterministic for a
/// given `--minlength` argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    /// Index assigned by makemkv.
    pub index: usize,

    pub info: Info,

    pub streams: Vec<Stream>,
}

impl Title {
    pub(crate) fn new(index: usize) -> Self {
        Title {
            index,
            info: Info::default(),
            streams: Vec::new(),
        }
    }

    /// Returns the stream with the given index, creating it (and placeholders
    /// for all prior indices) as necessary, so that `streams[i].index == i`.
    pub fn stream_mut(&mut self, index: usize) -> &mut Stream {
        while index >= self.streams.len() {
            self.streams.push(Stream::new(self.streams.len()));
        }

        &mut self.streams[index]
    }

    /// Returns the number of streams in the title.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }
}
