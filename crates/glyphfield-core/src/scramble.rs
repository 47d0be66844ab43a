//! Heading scramble and tagline reveal timing.

use rand::prelude::*;
use std::time::Duration;

pub const SCRAMBLE_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()_+-=[]{}|;:,.<>?";

/// Text that starts as noise and settles left to right onto `target`.
#[derive(Clone, Debug)]
pub struct Scramble {
    target: Vec<char>,
    charset: Vec<char>,
    duration: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    /// Number of leading characters already showing their final value.
    pub settled: usize,
    pub done: bool,
}

impl Scramble {
    pub fn new(target: &str, duration: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            charset: SCRAMBLE_CHARSET.chars().collect(),
            duration,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the animation elapsed, clamped to [0, 1].
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Text to show `elapsed` after the start.
    pub fn frame<R: Rng + ?Sized>(&self, elapsed: Duration, rng: &mut R) -> ScrambleFrame {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return ScrambleFrame {
                text: self.target(),
                settled: self.target.len(),
                done: true,
            };
        }
        let settled = (progress * self.target.len() as f32).floor() as usize;
        let text = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < settled {
                    c
                } else {
                    *self.charset.choose(rng).unwrap_or(&c)
                }
            })
            .collect();
        ScrambleFrame {
            text,
            settled,
            done: false,
        }
    }
}

/// Per-word reveal delays from `data-delay` attribute values. Leading digits
/// are read as milliseconds; anything unreadable reveals immediately.
pub fn reveal_plan<S: AsRef<str>>(delays: &[S]) -> Vec<Duration> {
    delays
        .iter()
        .map(|raw| {
            let digits: String = raw
                .as_ref()
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            Duration::from_millis(digits.parse().unwrap_or(0))
        })
        .collect()
}
