//! Attribute identifiers used by makemkvcon to describe discs, titles, and
//! streams.
//!
//! The list is a subset of apdefs.h from the MakeMKV for Linux source
//! tarball. That file is in the public domain and no copyright is claimed.

/// An attribute identifier carried by `CINFO`, `TINFO`, and `SINFO` lines.
///
/// makemkvcon emits ids this enum does not name; those are kept as opaque
/// integers on the parsed attribute rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Unknown = 0,
    Type = 1,
    Name = 2,
    LangCode = 3,
    LangName = 4,
    CodecId = 5,
    CodecShort = 6,
    CodecLong = 7,
    ChapterCount = 8,
    Duration = 9,
    DiskSize = 10,
    DiscSizeBytes = 11,
    StreamTypeExtension = 12,
    Bitrate = 13,
    AudioChannelsCount = 14,
    AngleInfo = 15,
    SourceFileName = 16,
    AudioSampleRate = 17,
    AudioSampleSize = 18,
    VideoSize = 19,
    VideoAspectRatio = 20,
    VideoFrameRate = 21,
    StreamFlags = 22,
    DateTime = 23,
    OriginalTitleId = 24,
    SegmentsCount = 25,
    SegmentsMap = 26,
    OutputFileName = 27,
    MetadataLanguageCode = 28,
    MetadataLanguageName = 29,
    TreeInfo = 30,
    PanelTitle = 31,
    VolumeName = 32,
    OrderWeight = 33,
    OutputFormat = 34,
    OutputFormatDescription = 35,
    SeamlessInfo = 36,
    PanelText = 37,
    MkvFlags = 38,
    MkvFlagsText = 39,
    AudioChannelLayoutName = 40,
    OutputCodecShort = 41,
    OutputConversionType = 42,
    OutputAudioSampleRate = 43,
    OutputAudioSampleSize = 44,
    OutputAudioChannelsCount = 45,
    OutputAudioChannelLayoutName = 46,
    OutputAudioChannelLayout = 47,
    OutputAudioMixDescription = 48,
    Comment = 49,
    OffsetSequenceId = 50,
}

impl Attr {
    /// Returns the raw integer id makemkvcon uses for this attribute.
    pub const fn id(self) -> i64 {
        self as i64
    }
}

/// The value of the [`Attr::Type`] code on a title or stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Title,
    Video,
    Audio,
    Subtitles,
}

impl StreamKind {
    /// Maps a raw type code (6200..=6203) to a kind.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            6200 => Some(StreamKind::Title),
            6201 => Some(StreamKind::Video),
            6202 => Some(StreamKind::Audio),
            6203 => Some(StreamKind::Subtitles),
            _ => None,
        }
    }
}
