//! One-shot typing effect.

use std::time::Duration;

/// Reveals a line of text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Full text to type.
    text: String,
    /// Pause before the first character.
    delay: Duration,
    /// Pause between characters.
    interval: Duration,
    /// Characters typed so far.
    typed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration, interval: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            interval,
            typed: 0,
        }
    }

    /// Catch up with the time elapsed since the page opened.
    ///
    /// The first character appears once `delay` has passed, then one more
    /// per `interval`. Typed characters are never taken back.
    pub fn update(&mut self, elapsed: Duration) {
        let Some(since_start) = elapsed.checked_sub(self.delay) else {
            return;
        };
        let steps = if self.interval.is_zero() {
            usize::MAX
        } else {
            (since_start.as_millis() / self.interval.as_millis().max(1))
                .try_into()
                .unwrap_or(usize::MAX)
        };
        let due = steps.saturating_add(1).min(self.len());
        self.typed = self.typed.max(due);
    }

    /// The portion typed so far.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.typed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.len()
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }
}
