//! Raw records: the flat field maps produced by parsing, prior to schema
//! mapping.

use std::collections::BTreeMap;

/// A single parsed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Int(i64),
}

/// Flat field mapping for one parsed entity, keyed by canonical field name.
///
/// Born when a boundary line is recognized, mutated line-by-line while its
/// body is scanned, and frozen once flushed into the output sequence. A
/// record whose name is empty is discarded at flush time instead of emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub name: String,
    fields: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    pub fn named(name: impl Into<String>) -> Self {
        RawRecord {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: FieldValue) {
        self.fields.insert(key.to_owned(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// String field, or `""` when absent or of another shape.
    pub fn text(&self, key: &str) -> &str {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// List field, or the empty sequence when absent or of another shape.
    pub fn list(&self, key: &str) -> &[String] {
        match self.fields.get(key) {
            Some(FieldValue::List(v)) => v,
            _ => &[],
        }
    }

    /// Integer field with a caller-supplied default.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.fields.get(key) {
            Some(FieldValue::Int(n)) => *n,
            _ => default,
        }
    }

    /// String field with a caller-supplied default for the absent case.
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => s,
            _ => default,
        }
    }

    /// Append prose to a multi-line text field, leaving a trailing space
    /// after every line so consecutive lines join with single spaces.
    pub fn append_text(&mut self, key: &str, line: &str) {
        let entry = self
            .fields
            .entry(key.to_owned())
            .or_insert_with(|| FieldValue::Text(String::new()));
        if let FieldValue::Text(s) = entry {
            s.push_str(line);
            s.push(' ');
        }
    }

    /// Append one element to a list field, creating it on first use.
    pub fn push_list(&mut self, key: &str, element: &str) {
        let entry = self
            .fields
            .entry(key.to_owned())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        if let FieldValue::List(v) = entry {
            v.push(element.to_owned());
        }
    }
}
