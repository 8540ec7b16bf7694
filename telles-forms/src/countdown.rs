//! Seconds-until-redirect counter on the "done" pages.

use crate::error::FormError;
use crate::redirect;
use std::time::Duration;

pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// What the page should do after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Show this many seconds.
    Show(u32),
    /// Time is up; leave for this URL.
    Navigate(String),
    /// Time is up but there is nowhere to go.
    Failed(FormError),
    /// Already expired; the timer should have stopped.
    Stopped,
}

/// Leading whole seconds of a text such as "5秒" or " 10 ".
///
/// Leading whitespace and one `+` are skipped; `None` when no digit follows.
pub fn parse_seconds(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // more digits than fit still means "a long time"
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: i64,
    target: Option<String>,
    expired: bool,
}

impl Countdown {
    pub fn new(seconds: u32, target: Option<String>) -> Self {
        Self {
            remaining: i64::from(seconds),
            target,
            expired: false,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining.max(0)
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::Stopped;
        }
        self.remaining -= 1;
        if self.remaining >= 0 {
            return Tick::Show(self.remaining as u32);
        }
        self.expired = true;
        match redirect::require_target(self.target.as_deref()) {
            Ok(url) => Tick::Navigate(url.to_string()),
            Err(e) => {
                log::error!("{e}");
                Tick::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_then_navigates() {
        let mut cd = Countdown::new(2, Some("/login/".to_string()));
        assert_eq!(cd.tick(), Tick::Show(1));
        assert_eq!(cd.tick(), Tick::Show(0));
        assert!(!cd.is_expired());
        assert_eq!(cd.tick(), Tick::Navigate("/login/".to_string()));
        assert!(cd.is_expired());
        assert_eq!(cd.tick(), Tick::Stopped);
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn test_parse_seconds_reads_leading_digits() {
        assert_eq!(parse_seconds("5秒"), Some(5));
        assert_eq!(parse_seconds("  12 seconds"), Some(12));
        assert_eq!(parse_seconds("+3"), Some(3));
        assert_eq!(parse_seconds("007"), Some(7));
        assert_eq!(parse_seconds("99999999999"), Some(u32::MAX));
    }

    #[test]
    fn test_parse_seconds_rejects_non_numeric() {
        assert_eq!(parse_seconds("秒"), None);
        assert_eq!(parse_seconds(""), None);
        assert_eq!(parse_seconds("-5"), None);
        assert_eq!(parse_seconds("abc5"), None);
    }

    #[test]
    fn test_missing_url_fails_once() {
        let mut cd = Countdown::new(0, None);
        assert_eq!(cd.tick(), Tick::Failed(FormError::MissingRedirectUrl));
        assert_eq!(cd.tick(), Tick::Stopped);
    }
}
