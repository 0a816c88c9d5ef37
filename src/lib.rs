//! # flatkit
//!
//! A flat JSON key scanner plus a few small, self-contained utilities.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatkit::{is_valid_json, parse_json_int, parse_json_string};
//!
//! let doc = r#"{"name": "Alice", "age": 30, "city": "NYC"}"#;
//!
//! assert!(is_valid_json(doc));
//! assert_eq!(parse_json_int(doc, "age"), 30);
//! assert_eq!(parse_json_string(doc, "city").as_deref(), Some("NYC"));
//!
//! // Absence is reported in-band.
//! assert_eq!(parse_json_int(doc, "height"), -1);
//! assert_eq!(parse_json_string(doc, "country"), None);
//! ```
//!
//! ## Modules
//!
//! - **Scanner**: substring lookups over a single-level JSON object,
//!   with sentinel entry points and a configurable [`FlatJsonScanner`].
//! - [`arith`]: wrapping integer addition and slice helpers.
//! - [`greeting`]: `"Hello, <name>!"` construction.
//! - [`Counter`]: a mutable signed counter.
//!
//! ## Limitations
//!
//! The scanner is **not** a JSON parser. It understands no nesting,
//! arrays, floats or escape sequences, and [`parse_json_int`] returns
//! `-1` both for a missing key and for a stored `-1`.

pub mod arith;
pub mod greeting;

mod counter;
mod scanner;

pub use counter::Counter;
pub use scanner::{
    FlatJsonScanner, MISSING_INT, ScanError, ScannerConfig, is_valid_json, parse_json_int,
    parse_json_string,
};
