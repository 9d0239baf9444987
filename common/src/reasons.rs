//! Rotating reason selector.
//!
//! The selector walks forward through a fixed list with wraparound. An
//! advance happens in two halves:
//!
//! 1. [`begin_advance`](ReasonSelector::begin_advance) marks the selector as
//!    transitioning so the text can fade out.
//! 2. After the fade delay, [`commit_advance`](ReasonSelector::commit_advance)
//!    moves the index forward by one *from its current value* and clears the
//!    transitioning flag.
//!
//! The commit never uses an index captured when the advance began. Two
//! advances started back to back therefore move the cursor by two, no matter
//! how their delays interleave.

/// Cursor over a fixed, ordered list of reasons.
#[derive(Clone, Copy, Debug)]
pub struct ReasonSelector {
    reasons: &'static [&'static str],
    current: usize,
    transitioning: bool,
}

impl ReasonSelector {
    pub const fn new(reasons: &'static [&'static str]) -> Self {
        Self {
            reasons,
            current: 0,
            transitioning: false,
        }
    }

    /// Mark the start of a transition.
    pub fn begin_advance(&mut self) { self.transitioning = true; }

    /// Step forward one reason from the live index and end the transition.
    ///
    /// Returns the new index. With an empty list the index stays at zero.
    pub fn commit_advance(&mut self) -> usize {
        let len = self.reasons.len();
        if len > 0 {
            self.current = (self.current + 1) % len;
        }
        self.transitioning = false;
        log::debug!("reason {} of {}", self.current + 1, len);
        self.current
    }

    #[inline]
    pub const fn index(&self) -> usize { self.current }

    #[inline]
    pub const fn len(&self) -> usize { self.reasons.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.reasons.is_empty() }

    #[inline]
    pub const fn is_transitioning(&self) -> bool { self.transitioning }

    /// Text of the current reason.
    pub fn current(&self) -> Option<&'static str> { self.reasons.get(self.current).copied() }

    /// One-based position for the "N of L" caption.
    pub const fn position(&self) -> (usize, usize) { (self.current + 1, self.reasons.len()) }
}
