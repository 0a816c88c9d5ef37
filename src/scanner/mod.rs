//! Flat JSON key scanner.
//!
//! Extracts integer and string values from a single-level JSON object
//! by literal substring search. No parse tree is built: each lookup is
//! one left-to-right pass over the buffer that locates the first
//! `"<key>"`, steps over the `:` separator and reads the value that
//! follows.
//!
//! # Entry points
//!
//! Two layers are provided:
//!
//! - [`parse_json_int`], [`parse_json_string`] and [`is_valid_json`]
//!   report absence in-band. A missing integer key yields `-1`, which
//!   is **indistinguishable** from a key whose value really is `-1`.
//! - [`FlatJsonScanner`] returns `Result<Option<_>, ScanError>`, keeping
//!   "absent" and "present" apart and enforcing the size limits from
//!   [`ScannerConfig`].
//!
//! # Accepted input
//!
//! ```text
//! {"name": "Alice", "age": 30, "city": "NYC"}
//! ```
//!
//! Nested objects, arrays, floats and escape sequences are not
//! understood. A `"` inside a string value always terminates it.
//!
//! # Lenient integer reads
//!
//! After a key is found the integer reader stops at the first byte that
//! is not a digit. If no digits follow, the value is `0`. Digit runs
//! that overflow `i64` saturate at `i64::MIN` / `i64::MAX`.

mod cursor;


use thiserror::Error;
use tracing::{debug, trace};

use cursor::Cursor;

// ------------------------------------------------------------------------------------------------
// Sentinels
// ------------------------------------------------------------------------------------------------

/// Value returned by [`parse_json_int`] when the key is absent.
pub const MISSING_INT: i64 = -1;

/// Scanner used by the sentinel entry points.
const UNBOUNDED: FlatJsonScanner = FlatJsonScanner::unbounded();

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Size limits for a [`FlatJsonScanner`].
///
/// # Example
///
/// ```rust
/// use flatkit::ScannerConfig;
///
/// let config = ScannerConfig {
///     max_value_len: 256,
///     ..ScannerConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Largest buffer a lookup will scan, in bytes.
    ///
    /// Default: 16 MiB. Must be ≥ 2 (the length of `{}`).
    pub max_input_len: usize,

    /// Largest string value [`FlatJsonScanner::find_str`] will copy out,
    /// in bytes.
    ///
    /// Default: 1 MiB. Must be ≥ 1 and ≤ `max_input_len`.
    pub max_value_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_input_len: 16 * 1024 * 1024,
            max_value_len: 1024 * 1024,
        }
    }
}

impl ScannerConfig {
    /// No effective limits.
    pub const fn unbounded() -> Self {
        Self {
            max_input_len: usize::MAX,
            max_value_len: usize::MAX,
        }
    }

    fn validate(&self) -> Result<(), ScanError> {
        if self.max_input_len < 2 {
            return Err(ScanError::InvalidConfig(
                "max_input_len must be >= 2".into(),
            ));
        }
        if self.max_value_len < 1 {
            return Err(ScanError::InvalidConfig(
                "max_value_len must be >= 1".into(),
            ));
        }
        if self.max_value_len > self.max_input_len {
            return Err(ScanError::InvalidConfig(
                "max_value_len must be <= max_input_len".into(),
            ));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors returned by [`FlatJsonScanner`] lookups.
///
/// A missing key is **not** an error; it is reported as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input buffer is longer than `max_input_len`.
    #[error("input too large ({len} bytes, limit {max})")]
    InputTooLarge {
        /// Length of the rejected buffer.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// A string value is longer than `max_value_len`.
    #[error("string value too long ({len} bytes, limit {max})")]
    ValueTooLong {
        /// Length of the rejected value.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// The bytes of a string value are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

// ------------------------------------------------------------------------------------------------
// Scanner
// ------------------------------------------------------------------------------------------------

/// Flat JSON scanner with configurable size limits.
///
/// The scanner holds only its [`ScannerConfig`]; it never retains any
/// buffer passed to it and is cheap to copy between threads.
///
/// ```rust
/// use flatkit::{FlatJsonScanner, ScannerConfig};
///
/// let scanner = FlatJsonScanner::new(ScannerConfig::default()).unwrap();
/// let doc = br#"{"age": -1, "name": "Bob"}"#;
///
/// assert_eq!(scanner.find_int(doc, b"age").unwrap(), Some(-1));
/// assert_eq!(scanner.find_int(doc, b"height").unwrap(), None);
/// assert_eq!(scanner.find_str(doc, b"name").unwrap().as_deref(), Some("Bob"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatJsonScanner {
    config: ScannerConfig,
}

impl Default for FlatJsonScanner {
    fn default() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }
}

impl FlatJsonScanner {
    /// Creates a scanner after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfig`] if any limit is out of range.
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A scanner with no effective size limits.
    pub const fn unbounded() -> Self {
        Self {
            config: ScannerConfig::unbounded(),
        }
    }

    /// The limits this scanner enforces.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Looks up `key` and reads the integer that follows it.
    ///
    /// Returns `Ok(None)` if `"<key>"` does not occur in `buffer`.
    /// Non-numeric text after a found key reads as `Some(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InputTooLarge`] if `buffer` exceeds
    /// `max_input_len`.
    pub fn find_int(&self, buffer: &[u8], key: &[u8]) -> Result<Option<i64>, ScanError> {
        let Some(mut cur) = self.locate(buffer, key)? else {
            return Ok(None);
        };
        Ok(Some(cur.read_int()))
    }

    /// Looks up `key` and copies out the quoted string that follows it.
    ///
    /// Returns `Ok(None)` if `"<key>"` does not occur, if the value does
    /// not start with `"`, or if the closing `"` is missing. The returned
    /// `String` is owned by the caller.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InputTooLarge`] if `buffer` exceeds `max_input_len`.
    /// - [`ScanError::ValueTooLong`] if the value exceeds `max_value_len`.
    /// - [`ScanError::InvalidUtf8`] if the value bytes are not UTF-8.
    pub fn find_str(&self, buffer: &[u8], key: &[u8]) -> Result<Option<String>, ScanError> {
        let Some(mut cur) = self.locate(buffer, key)? else {
            return Ok(None);
        };

        if !cur.eat(b'"') {
            trace!(pos = cur.position(), "value is not a string");
            return Ok(None);
        }
        let Some(raw) = cur.take_until(b'"') else {
            trace!(pos = cur.position(), "unterminated string value");
            return Ok(None);
        };

        if raw.len() > self.config.max_value_len {
            return Err(ScanError::ValueTooLong {
                len: raw.len(),
                max: self.config.max_value_len,
            });
        }

        Ok(Some(String::from_utf8(raw.to_vec())?))
    }

    /// Outer-brace check: after trimming ASCII whitespace, `buffer` must
    /// start with `{` and end with `}`.
    ///
    /// Inner content and brace balance are not inspected, and the size
    /// limits do not apply.
    pub fn is_valid(&self, buffer: &[u8]) -> bool {
        let trimmed = buffer.trim_ascii();
        trimmed.first() == Some(&b'{') && trimmed.last() == Some(&b'}')
    }

    // --------------------------------------------------------------------------------------------
    // Internal helpers
    // --------------------------------------------------------------------------------------------

    /// Positions a cursor on the first byte of the value for `key`.
    ///
    /// Skips whitespace, an optional `:` and more whitespace after the
    /// quoted key.
    fn locate<'a>(&self, buffer: &'a [u8], key: &[u8]) -> Result<Option<Cursor<'a>>, ScanError> {
        if buffer.len() > self.config.max_input_len {
            return Err(ScanError::InputTooLarge {
                len: buffer.len(),
                max: self.config.max_input_len,
            });
        }

        let mut cur = Cursor::new(buffer);
        if !cur.seek_quoted(key) {
            trace!(key = %String::from_utf8_lossy(key), "key not found");
            return Ok(None);
        }
        trace!(key = %String::from_utf8_lossy(key), pos = cur.position(), "key found");

        cur.skip_whitespace();
        cur.eat(b':');
        cur.skip_whitespace();
        Ok(Some(cur))
    }
}

// ------------------------------------------------------------------------------------------------
// Sentinel entry points
// ------------------------------------------------------------------------------------------------

/// Returns the integer stored under `key`, or [`MISSING_INT`] (`-1`) if
/// the key is absent.
///
/// `-1` is also a valid stored value, so a return of `-1` does not prove
/// the key is missing. Use [`FlatJsonScanner::find_int`] when the
/// difference matters.
///
/// ```rust
/// use flatkit::parse_json_int;
///
/// assert_eq!(parse_json_int(r#"{"age": 25}"#, "age"), 25);
/// assert_eq!(parse_json_int(r#"{"age": 25}"#, "missing"), -1);
/// ```
pub fn parse_json_int(buffer: &str, key: &str) -> i64 {
    match UNBOUNDED.find_int(buffer.as_bytes(), key.as_bytes()) {
        Ok(Some(value)) => value,
        Ok(None) => MISSING_INT,
        Err(e) => {
            debug!(key, "integer lookup failed, returning sentinel: {e}");
            MISSING_INT
        }
    }
}

/// Returns a newly allocated copy of the string stored under `key`, or
/// `None` if the key is absent or its value is not a terminated string.
///
/// The caller owns the returned `String`; the scanner keeps no
/// reference to it.
///
/// ```rust
/// use flatkit::parse_json_string;
///
/// assert_eq!(parse_json_string(r#"{"name": "John"}"#, "name").as_deref(), Some("John"));
/// assert_eq!(parse_json_string(r#"{"name": "Bob"}"#, "missing"), None);
/// ```
pub fn parse_json_string(buffer: &str, key: &str) -> Option<String> {
    match UNBOUNDED.find_str(buffer.as_bytes(), key.as_bytes()) {
        Ok(value) => value,
        Err(e) => {
            debug!(key, "string lookup failed, returning absence: {e}");
            None
        }
    }
}

/// Returns `true` if `buffer`, trimmed of surrounding whitespace, begins
/// with `{` and ends with `}`.
///
/// This is not a JSON validator: `{ } }` passes.
pub fn is_valid_json(buffer: &str) -> bool {
    UNBOUNDED.is_valid(buffer.as_bytes())
}
