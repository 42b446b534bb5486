//! Parsing for the colon-separated duration strings makemkvcon uses for the
//! duration attribute, e.g. "1:22:33".

use crate::error::{CoreError, CoreResult};
use std::time::Duration;

/// Parses a duration with hours, minutes, and seconds separated by colons.
/// Shorter forms ("22:33", "33") and fractional seconds are accepted.
pub fn parse_duration(s: &str) -> CoreResult<Duration> {
    let tokens: Vec<&str> = s.split(':').collect();
    if tokens.len() > 3 {
        return Err(value_error(s, "expected at most 3 colon-separated components"));
    }

    // Right-align: a missing component is a missing hour/minute, not second.
    let mut parts = [0f64; 3];
    for (part, token) in parts[3 - tokens.len()..].iter_mut().zip(&tokens) {
        let n: f64 = token
            .parse()
            .map_err(|_| value_error(s, "non-numeric component"))?;
        if !n.is_finite() || n < 0.0 {
            return Err(value_error(s, "negative or non-finite component"));
        }
        *part = n;
    }

    Ok(Duration::from_secs_f64(
        parts[0] * 3600.0 + parts[1] * 60.0 + parts[2],
    ))
}

fn value_error(value: &str, reason: &str) -> CoreError {
    CoreError::ValueParse {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_full() {
        assert_eq!(parse_duration("1:22:33").unwrap(), Duration::from_secs(4953));
    }

    #[test]
    fn test_parse_duration_short_forms() {
        assert_eq!(parse_duration("22:33").unwrap(), Duration::from_secs(1353));
        assert_eq!(parse_duration("33").unwrap(), Duration::from_secs(33));
    }

    #[test]
    fn test_parse_duration_fractional_seconds() {
        assert_eq!(
            parse_duration("0:00:01.5").unwrap(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("1:2:3:4").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("-1:00").is_err());
    }
}
