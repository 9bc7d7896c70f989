//! Helpers for breaking plain text into [`List`]s of owned strings, including the bracketed
//! array notation used by configuration values (`[One, Two, Three]`).

use std::fmt::Display;

use crate::collections::list::List;

/// Splits `text` on every occurrence of `separator`, collecting the pieces as owned strings.
///
/// Adjacent separators produce empty strings, matching [`str::split`].
pub fn split(text: &str, separator: &str) -> List<String> {
    text.split(separator).map(String::from).collect()
}

/// Splits `text` on `separator` at most `n - 1` times; the final piece keeps any remaining
/// separators. `n_split(text, 1, sep)` therefore returns the whole text as a single element.
pub fn n_split(text: &str, n: usize, separator: &str) -> List<String> {
    text.splitn(n, separator).map(String::from).collect()
}

/// Reads a bracketed, comma-separated rendering like `[One, Two, Three]` into its elements,
/// trimming the whitespace around each. Returns [`None`] when `text` is not wrapped in brackets.
///
/// `[]` parses as an empty [`List`], and spacing after the commas is optional.
pub fn parse_array(text: &str) -> Option<List<String>> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;

    if inner.trim().is_empty() {
        return Some(List::new());
    }

    Some(inner.split(',').map(|piece| piece.trim().to_string()).collect())
}

/// Renders `items` into the bracketed notation accepted by [`parse_array`].
pub fn render_array<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut rendered = String::from("[");

    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(&item.to_string());
    }

    rendered.push(']');
    rendered
}
