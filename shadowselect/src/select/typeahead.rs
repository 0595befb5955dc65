//! Keyboard search buffer with an idle reset.

use std::time::{Duration, Instant};

/// Characters typed in quick succession.
///
/// Each keystroke pushes the reset deadline `idle` into the future, so at
/// most one reset is ever pending. Time is passed in explicitly.
#[derive(Debug, Clone)]
pub struct TypeAhead {
    buffer: String,
    deadline: Option<Instant>,
    idle: Duration,
}

impl TypeAhead {
    pub fn new(idle: Duration) -> Self {
        Self {
            buffer: String::new(),
            deadline: None,
            idle,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// When the pending reset fires, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Append a keystroke and restart the reset deadline.
    ///
    /// A keystroke arriving at or after the deadline starts a fresh buffer,
    /// whether or not [`expire`](Self::expire) ran in between.
    pub fn push(&mut self, c: char, now: Instant) -> &str {
        self.expire(now);
        self.buffer.push(c);
        self.deadline = Some(now + self.idle);
        &self.buffer
    }

    /// Clear the buffer if its deadline has passed. Returns true if it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: Duration = Duration::from_millis(500);

    #[test]
    fn keystrokes_accumulate_within_idle() {
        let mut ta = TypeAhead::new(IDLE);
        let t0 = Instant::now();
        ta.push('a', t0);
        assert_eq!(ta.push('p', t0 + Duration::from_millis(499)), "ap");
    }

    #[test]
    fn each_keystroke_restarts_deadline() {
        let mut ta = TypeAhead::new(IDLE);
        let t0 = Instant::now();
        ta.push('a', t0);
        ta.push('b', t0 + Duration::from_millis(400));
        assert!(!ta.expire(t0 + Duration::from_millis(800)));
        assert_eq!(ta.buffer(), "ab");
        assert!(ta.expire(t0 + Duration::from_millis(900)));
        assert_eq!(ta.buffer(), "");
        assert_eq!(ta.deadline(), None);
    }

    #[test]
    fn late_keystroke_starts_fresh() {
        let mut ta = TypeAhead::new(IDLE);
        let t0 = Instant::now();
        ta.push('a', t0);
        assert_eq!(ta.push('p', t0 + IDLE), "p");
    }
}
