//! Hero-section text animations as explicit timer-driven state machines.
//!
//! The original effect chained single-shot timeouts recursively; here each
//! animation is a plain state machine (index counter + remaining delay)
//! advanced by [`tick`](Typewriter::tick) with an externally supplied delta,
//! so the whole sequence is deterministic and testable without a clock.

use std::time::Duration;

/// Delay between revealed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(140);
/// Fade transition time before a tagline swap.
pub const FADE_DELAY: Duration = Duration::from_millis(500);
/// How long each tagline stays on screen before the next fade.
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

/// Sequential character-reveal animation over a fixed text.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the end of each revealed prefix; `ends[k]` is the
    /// prefix covering the first `k` characters, so `ends[0] == 0`.
    ends: Vec<usize>,
    shown: usize,
    delay: Duration,
    accumulated: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        let text = text.into();
        let mut ends = vec![0];
        ends.extend(text.char_indices().map(|(i, c)| i + c.len_utf8()));
        Self {
            text,
            ends,
            shown: 0,
            delay,
            accumulated: Duration::ZERO,
        }
    }

    /// Advance by `dt`, revealing one whole character per elapsed delay.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_done() {
            return;
        }
        self.accumulated += dt;
        while self.accumulated >= self.delay && !self.is_done() {
            self.accumulated -= self.delay;
            self.shown += 1;
        }
    }

    /// The currently revealed prefix. Never splits a multi-byte character.
    pub fn visible(&self) -> &str {
        &self.text[..self.ends[self.shown]]
    }

    pub fn is_done(&self) -> bool {
        self.shown + 1 == self.ends.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    /// Text hidden, waiting out the fade transition before the next swap.
    FadeOut { remaining: Duration },
    /// Current tagline on screen, waiting before fading to the next.
    Hold { remaining: Duration },
    /// Last tagline reached; it stays visible forever.
    Parked,
}

/// Fixed-order tagline rotation with fade transitions.
///
/// Nothing is shown until the first fade elapses; after the final tagline the
/// machine parks and keeps it visible.
#[derive(Debug, Clone)]
pub struct TaglineCycler {
    taglines: Vec<String>,
    next: usize,
    shown: Option<usize>,
    fade: Duration,
    hold: Duration,
    phase: Phase,
}

impl TaglineCycler {
    pub fn new<I, S>(taglines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delays(taglines, FADE_DELAY, HOLD_DELAY)
    }

    pub fn with_delays<I, S>(taglines: I, fade: Duration, hold: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let taglines: Vec<String> = taglines.into_iter().map(Into::into).collect();
        let phase = if taglines.is_empty() {
            Phase::Parked
        } else {
            Phase::FadeOut { remaining: fade }
        };
        Self {
            taglines,
            next: 0,
            shown: None,
            fade,
            hold,
            phase,
        }
    }

    /// Advance the rotation by `dt`, crossing phase boundaries as needed.
    pub fn tick(&mut self, dt: Duration) {
        let mut dt = dt;
        loop {
            match &mut self.phase {
                Phase::FadeOut { remaining } => {
                    if dt < *remaining {
                        *remaining -= dt;
                        return;
                    }
                    dt -= *remaining;
                    self.shown = Some(self.next);
                    self.next += 1;
                    self.phase = if self.next < self.taglines.len() {
                        Phase::Hold {
                            remaining: self.hold,
                        }
                    } else {
                        Phase::Parked
                    };
                }
                Phase::Hold { remaining } => {
                    if dt < *remaining {
                        *remaining -= dt;
                        return;
                    }
                    dt -= *remaining;
                    self.phase = Phase::FadeOut {
                        remaining: self.fade,
                    };
                }
                Phase::Parked => return,
            }
        }
    }

    /// The tagline currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        self.shown.map(|i| self.taglines[i].as_str())
    }

    /// Whether the text is visible (hidden during fade transitions).
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::FadeOut { .. }) && self.shown.is_some()
    }

    /// True once the final tagline is showing and the rotation has stopped.
    pub fn is_parked(&self) -> bool {
        matches!(self.phase, Phase::Parked)
    }
}
