// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde::ser::Error as _;
use std::fmt;

#[derive(Serialize)]
struct Row {
    name: &'static str,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.name)
    }
}

/// Displays fine but refuses to serialize
struct Opaque;

impl Serialize for Opaque {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Err(S::Error::custom("opaque value"))
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opaque")
    }
}

fn render<T: Serialize + fmt::Display>(items: &[T], format: OutputFormat) -> Result<String> {
    let mut out = Vec::new();
    write_list(&mut out, items, format)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn text_prints_one_line_per_item() {
    let text = render(&[Row { name: "a" }, Row { name: "b" }], OutputFormat::Text).unwrap();
    assert_eq!(text, "row a\nrow b\n");
}

#[test]
fn json_prints_an_array() {
    let text = render(&[Row { name: "a" }], OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["name"], "a");
}

#[test]
fn json_serialization_failure_is_an_error() {
    let err = render(&[Opaque], OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("opaque value"));
}

#[test]
fn text_does_not_serialize() {
    assert_eq!(render(&[Opaque], OutputFormat::Text).unwrap(), "opaque\n");
}
