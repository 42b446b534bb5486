//! Utility functions for selection, formatting, and file naming.

use std::time::Duration;

/// Returns all elements of the slice that maximize the given function, i.e.
/// where `f(e) == max(f(e0), f(e1), ..., f(eN))`, in original order.
///
/// Elements for which `f` returns `None` do not participate.
pub fn maximums<T, V, F>(items: &[T], mut f: F) -> Vec<&T>
where
    V: PartialOrd,
    F: FnMut(&T) -> Option<V>,
{
    let mut max: Option<V> = None;
    let mut winners: Vec<&T> = Vec::new();
    for item in items {
        let Some(v) = f(item) else {
            continue;
        };

        match &max {
            Some(m) if v > *m => {
                max = Some(v);
                winners.clear();
                winners.push(item);
            }
            Some(m) if v == *m => winners.push(item),
            Some(_) => {}
            None => {
                max = Some(v);
                winners.push(item);
            }
        }
    }

    winners
}

/// Formats a duration as hours, minutes, and seconds (e.g. "1h 32m 28s").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}h {minutes}m {secs}s")
}

/// Strips or replaces characters that are hostile to common filesystems.
/// `:` becomes `-`; other reserved and non-printable characters are dropped.
#[must_use]
pub fn sanitize_file_name(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            ':' => Some('-'),
            '/' | '\\' | '<' | '>' | '"' | '*' | '|' | '?' => None,
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximums_single_winner() {
        let items = [3, 1, 4, 1, 5];
        assert_eq!(maximums(&items, |&n| Some(n)), vec![&5]);
    }

    #[test]
    fn test_maximums_ties_preserve_order() {
        let items = [2, 5, 5, 1, 5];
        assert_eq!(maximums(&items, |&n| Some(n)), vec![&5, &5, &5]);
    }

    #[test]
    fn test_maximums_skips_none() {
        let items = [10, 2, 3];
        let winners = maximums(&items, |&n| if n > 5 { None } else { Some(n) });
        assert_eq!(winners, vec![&3]);
    }

    #[test]
    fn test_maximums_empty() {
        let items: [i32; 0] = [];
        assert!(maximums(&items, |&n| Some(n)).is_empty());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0h 0m 0s");
        assert_eq!(format_duration(Duration::from_secs(61)), "0h 1m 1s");
        assert_eq!(format_duration(Duration::from_secs(5548)), "1h 32m 28s");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Movie: The Sequel"), "Movie- The Sequel");
        assert_eq!(sanitize_file_name("a/b\\c<d>e\"f*g|h?i"), "abcdefghi");
        assert_eq!(sanitize_file_name("plain name"), "plain name");
    }
}
