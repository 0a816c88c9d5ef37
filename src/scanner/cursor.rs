//! Forward-only byte cursor used by the scanner.
//!
//! All reads are bounds-checked through `get`, so no method here can
//! panic regardless of input.

/// A read position over an immutable byte buffer.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset into the input.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume the current byte if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip JSON whitespace (space, tab, LF, CR).
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Advance past the first `"<key>"` at or after the current position.
    ///
    /// Returns `false` and leaves the cursor untouched when the quoted
    /// key does not occur.
    pub(crate) fn seek_quoted(&mut self, key: &[u8]) -> bool {
        let width = key.len() + 2;
        let Some(rest) = self.input.get(self.pos..) else {
            return false;
        };
        if rest.len() < width {
            return false;
        }

        let hit = rest.windows(width).position(|w| {
            w.first() == Some(&b'"')
                && w.last() == Some(&b'"')
                && w.get(1..width - 1) == Some(key)
        });

        match hit {
            Some(offset) => {
                self.pos += offset + width;
                true
            }
            None => false,
        }
    }

    /// Consume bytes up to the next `delim` and return them, stepping
    /// past the delimiter itself.
    ///
    /// Returns `None` if `delim` never appears; the cursor is unchanged.
    pub(crate) fn take_until(&mut self, delim: u8) -> Option<&'a [u8]> {
        let rest = self.input.get(self.pos..)?;
        let len = rest.iter().position(|&b| b == delim)?;
        let taken = rest.get(..len)?;
        self.pos += len + 1;
        Some(taken)
    }

    /// Read an optionally negative run of decimal digits.
    ///
    /// Stops at the first non-digit. An empty run yields `0`; values
    /// beyond the `i64` range saturate.
    pub(crate) fn read_int(&mut self) -> i64 {
        let negative = self.eat(b'-');
        let mut value: i64 = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            self.pos += 1;
            let digit = i64::from(d - b'0');
            value = value.saturating_mul(10);
            value = if negative {
                value.saturating_sub(digit)
            } else {
                value.saturating_add(digit)
            };
        }
        value
    }
}
