use super::{Info, Title};
use crate::protocol::Attr;
use crate::utils::maximums;
use std::time::Duration;

/// A sequence of titles plus disc-level metadata, produced by one scan of a
/// drive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disc {
    pub info: Info,

    pub titles: Vec<Title>,
}

impl Disc {
    /// Returns the title with the given index, creating it (and placeholders
    /// for all prior indices) as necessary, so that `titles[i].index == i`.
    pub fn title_mut(&mut self, index: usize) -> &mut Title {
        while index >= self.titles.len() {
            self.titles.push(Title::new(self.titles.len()));
        }

        &mut self.titles[index]
    }

    /// Returns the number of titles on the disc.
    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    /// Returns all titles that tie for maximum duration.
    pub fn titles_with_longest_duration(&self) -> Vec<&Title> {
        maximums(&self.titles, |title: &Title| -> Option<Duration> {
            title.info.attr_duration(Attr::Duration).ok()
        })
    }

    /// Returns all titles with the given angle.
    pub fn titles_with_angle(&self, target_angle: i64) -> Vec<&Title> {
        self.titles
            .iter()
            .filter(|title| {
                title
                    .info
                    .attr_int(Attr::AngleInfo)
                    .is_ok_and(|angle| angle == target_angle)
            })
            .collect()
    }

    /// Returns all titles that tie for maximum number of chapters.
    pub fn titles_with_most_chapters(&self) -> Vec<&Title> {
        maximums(&self.titles, |title: &Title| -> Option<i64> {
            title.info.attr_int(Attr::ChapterCount).ok()
        })
    }

    /// Returns all titles that tie for maximum number of streams.
    pub fn titles_with_most_streams(&self) -> Vec<&Title> {
        maximums(&self.titles, |title: &Title| Some(title.stream_count()))
    }
}
