//! A mutable signed counter.

use tracing::trace;

/// Signed integer counter with increment, decrement and reset.
///
/// Each instance owns its value; instances never share state.
///
/// ```rust
/// use flatkit::Counter;
///
/// let mut c = Counter::new(5);
/// c.increment();
/// c.decrement();
/// c.decrement();
/// assert_eq!(c.value(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter starting at `initial`.
    pub fn new(initial: i64) -> Self {
        Self { value: initial }
    }

    /// Adds one, wrapping at `i64::MAX`.
    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    /// Subtracts one, wrapping at `i64::MIN`.
    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }

    /// Sets the value back to `0`.
    pub fn reset(&mut self) {
        trace!(from = self.value, "counter reset");
        self.value = 0;
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }
}
