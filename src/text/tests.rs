#![cfg(test)]

use super::*;
use crate::collections::list::List;

fn owned(parts: &[&str]) -> List<String> {
    parts.iter().map(|part| String::from(*part)).collect()
}

#[test]
fn test_split_on_separator() {
    assert_eq!(
        split("path/to/some/file", "/"),
        owned(&["path", "to", "some", "file"])
    );
}

#[test]
fn test_split_keeps_empty_pieces() {
    assert_eq!(split("a,,b", ","), owned(&["a", "", "b"]));
    assert_eq!(split("", ","), owned(&[""]));
}

#[test]
fn test_n_split_stops_early() {
    assert_eq!(
        n_split("KEY=this=value", 2, "="),
        owned(&["KEY", "this=value"])
    );
    assert_eq!(n_split("a,b,c", 1, ","), owned(&["a,b,c"]));
}

#[test]
fn test_parse_array() {
    assert_eq!(
        parse_array("[One, Two, Three]"),
        Some(owned(&["One", "Two", "Three"]))
    );
}

#[test]
fn test_parse_array_without_spaces() {
    assert_eq!(
        parse_array("[One,String,Next,to,another]"),
        Some(owned(&["One", "String", "Next", "to", "another"]))
    );
}

#[test]
fn test_parse_empty_array() {
    assert_eq!(parse_array("[]"), Some(List::new()));
    assert_eq!(parse_array("[  ]"), Some(List::new()));
}

#[test]
fn test_parse_array_tolerates_outer_whitespace() {
    assert_eq!(parse_array("  [1, 2]  "), Some(owned(&["1", "2"])));
}

#[test]
fn test_parse_array_rejects_unbracketed_text() {
    assert_eq!(parse_array("1, 2, 3"), None);
    assert_eq!(parse_array("[1, 2, 3"), None);
    assert_eq!(parse_array("1, 2, 3]"), None);
}

#[test]
fn test_render_array() {
    assert_eq!(render_array(["One", "Two", "Three"]), "[One, Two, Three]");
    assert_eq!(render_array([1, 2, 3, 4, 5]), "[1, 2, 3, 4, 5]");
}

#[test]
fn test_render_empty_array() {
    let nothing: [u8; 0] = [];
    assert_eq!(render_array(nothing), "[]");
}

#[test]
fn test_render_then_parse() {
    let values = owned(&["One", "Two"]);
    assert_eq!(parse_array(&render_array(&values)), Some(values));
}
