//! On-screen event log and allocation-free number formatting.
//!
//! The debug page shows the last few card events (opening, page changes,
//! reason changes, playback requests). Lines are stamped with the uptime
//! second they happened at. The time-dependent `ProfilingMetrics` live in the
//! simulator since they need `std::time`.
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push_at(3, "reason 2 of 11");
//! for line in log.iter() {
//!     println!("{line}"); // "[0003] reason 2 of 11"
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Lines kept on the debug page.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Characters per line, stamp included.
pub const LOG_LINE_LENGTH: usize = 44;

/// Digits of the uptime stamp.
const STAMP_WIDTH: usize = 4;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of stamped event lines. The oldest line is dropped when full.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    total: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Push a line stamped with `uptime_secs`, truncating to fit.
    pub fn push_at(
        &mut self,
        uptime_secs: u64,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        line.push('[').ok();
        push_padded(&mut line, uptime_secs, STAMP_WIDTH);
        line.push_str("] ").ok();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Lines ever pushed, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a `u64` to a heapless string without the `format!` machinery.
pub fn push_u64<const N: usize>(
    s: &mut String<N>,
    val: u64,
) {
    push_padded(s, val, 1);
}

/// Push `val` left-padded with zeros to at least `width` digits.
pub fn push_padded<const N: usize>(
    s: &mut String<N>,
    mut val: u64,
    width: usize,
) {
    // Build digits in reverse
    let mut digits = [0u8; 20];
    let mut i = 0;
    loop {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
        if val == 0 {
            break;
        }
    }
    while i < width && i < digits.len() {
        digits[i] = 0;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push_at(0, "card opened");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("[0000] card opened"));

        log.push_at(12, "heart 4");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("[0012] heart 4"));
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();

        for i in 0..LOG_BUFFER_SIZE as u64 {
            let mut msg: String<16> = String::new();
            push_u64(&mut msg, i);
            log.push_at(i, &msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push_at(99, "new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.total(), LOG_BUFFER_SIZE as u32 + 1);

        // Line 0 was dropped
        assert_eq!(log.iter().next(), Some("[0001] 1"));
    }

    #[test]
    fn test_event_log_truncation() {
        let mut log = EventLog::new();
        log.push_at(1, "a reason so long that it cannot possibly fit on the debug page line");

        let stored = log.last().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.starts_with("[0001] a reason"));
    }

    #[test]
    fn test_stamp_grows_past_width() {
        let mut log = EventLog::new();
        log.push_at(123_456, "late");
        assert_eq!(log.last(), Some("[123456] late"));
    }

    #[test]
    fn test_push_u64() {
        let mut s: String<24> = String::new();
        push_u64(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<24> = String::new();
        push_u64(&mut s, 152);
        assert_eq!(s.as_str(), "152");

        let mut s: String<24> = String::new();
        push_u64(&mut s, u64::MAX);
        assert_eq!(s.as_str(), "18446744073709551615");
    }

    #[test]
    fn test_push_padded() {
        let mut s: String<8> = String::new();
        push_padded(&mut s, 4, 2);
        assert_eq!(s.as_str(), "04");

        let mut s: String<8> = String::new();
        push_padded(&mut s, 59, 2);
        assert_eq!(s.as_str(), "59");

        let mut s: String<8> = String::new();
        push_padded(&mut s, 0, 3);
        assert_eq!(s.as_str(), "000");
    }
}
