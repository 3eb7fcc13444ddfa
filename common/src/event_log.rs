//! Short text log of recent speedometer events.
//!
//! A fixed-capacity ring of lines, shown on the simulator's panel below the
//! digits. Lines longer than [`EVENT_LINE_LENGTH`] are truncated.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("32 mph shown");
//! log.push("below threshold");
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

/// Maximum number of lines kept in the ring buffer.
pub const EVENT_LOG_LINES: usize = 6;

/// Maximum characters per line.
pub const EVENT_LINE_LENGTH: usize = 40;

/// Ring buffer of event lines, oldest first.
pub struct EventLog {
    buffer: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_LINES>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Append a line, dropping the oldest when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Number of lines held.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Drop every line.
    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// Append the decimal form of `val` to a heapless string, without `format!`.
/// Digits that do not fit are dropped.
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    val: u32,
) {
    // u32::MAX has 10 digits
    let mut digits = [0u8; 10];
    let mut rest = val;
    let mut len = 0;
    loop {
        digits[len] = (rest % 10) as u8;
        rest /= 10;
        len += 1;
        if rest == 0 {
            break;
        }
    }

    for &digit in digits[..len].iter().rev() {
        if s.push(char::from(b'0' + digit)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("32 mph");
        assert_eq!(log.len(), 1);
        log.push("below threshold");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("below threshold"));
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..EVENT_LOG_LINES {
            log.push(&i.to_string());
        }
        assert_eq!(log.len(), EVENT_LOG_LINES);

        log.push("new");
        assert_eq!(log.len(), EVENT_LOG_LINES);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.last(), Some("new"));
    }

    #[test]
    fn test_truncation() {
        let mut log = EventLog::new();
        log.push("cycle 1234: 999 mph shown (saturated from 1946 mph)");

        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), EVENT_LINE_LENGTH);
        assert!(stored.starts_with("cycle 1234"));
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        s.clear();
        push_u32(&mut s, 47);
        s.push_str(" mph").ok();
        assert_eq!(s.as_str(), "47 mph");

        s.clear();
        push_u32(&mut s, u32::MAX);
        assert_eq!(s.as_str(), "4294967295");
    }

    #[test]
    fn test_push_u32_truncates() {
        let mut s: String<2> = String::new();
        push_u32(&mut s, 999);
        assert_eq!(s.as_str(), "99");
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.push("a");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }
}
