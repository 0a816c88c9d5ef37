//! Greeting construction.

/// Returns `"Hello, <name>!"`.
///
/// ```rust
/// use flatkit::greeting::greet;
///
/// assert_eq!(greet("World"), "Hello, World!");
/// ```
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Byte length of [`greet`]`(name)`, computed without allocating.
pub fn greeting_len(name: &str) -> usize {
    "Hello, !".len() + name.len()
}
