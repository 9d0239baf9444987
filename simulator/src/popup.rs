//! Popup state with time-based expiration.
//!
//! Each variant holds the monotonic time it was raised at, read from the
//! card's `Clock`.

use std::time::Duration;

use crate::timing::POPUP_DURATION;

#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "MUSIC ON" / "MUSIC OFF" after a toggle.
    Music(Duration),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Duration {
        match self {
            Self::Music(t) => *t,
        }
    }

    /// A clock reading before the raise time counts as not expired.
    #[inline]
    pub fn is_expired(
        &self,
        now: Duration,
    ) -> bool {
        now.saturating_sub(self.start_time()) >= POPUP_DURATION
    }
}
