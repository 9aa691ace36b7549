//! Character-by-character text reveal for the chat prompt

use std::time::{Duration, Instant};

/// Default delay between two typed characters
pub const TYPE_INTERVAL: Duration = Duration::from_millis(30);

/// Reveals `text` one character per `interval`, starting at `started`
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    interval: Duration,
    started: Instant,
}

impl Typewriter {
    pub fn new(text: &'static str, interval: Duration, started: Instant) -> Self {
        Typewriter {
            text,
            interval,
            started,
        }
    }

    /// Start typing again from the first character
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Number of characters visible at `now`
    pub fn typed_chars(&self, now: Instant) -> usize {
        let total = self.text.chars().count();
        if self.interval.is_zero() {
            return total;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let typed = elapsed.as_nanos() / self.interval.as_nanos();
        usize::try_from(typed).map_or(total, |n| n.min(total))
    }

    /// The visible prefix at `now`, always cut on a char boundary
    pub fn visible(&self, now: Instant) -> &'static str {
        let n = self.typed_chars(now);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => self.text,
        }
    }

    pub fn is_typing(&self, now: Instant) -> bool {
        self.typed_chars(now) < self.text.chars().count()
    }

    /// When the last character appears
    pub fn finishes_at(&self) -> Instant {
        let total = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.started + self.interval * total
    }
}
