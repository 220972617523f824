//! Line-oriented record extraction: boundary classification, field
//! interpretation, and sequential accumulation into raw records.
//!
//! The boundary rule is a closed-world heuristic carried over from the
//! source documents: a line that starts with `#` is a new entity, and so is
//! any line that matches no entry in the active label table. A prose line of
//! unrecognized shape outside an open section therefore reads as a new
//! entity name. Downstream consumers depend on that output shape, so the
//! heuristic is part of the contract (see the regression test below), not a
//! bug to repair.

use crate::labels::{FieldRule, LabelTable, SectionKind};
use crate::record::{FieldValue, RawRecord};

/// Classification of one input line against a label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty line or document header; contributes nothing.
    Ignored,
    /// Starts a new record.
    Boundary,
    /// Belongs to the current record's body.
    Body,
}

/// Classify a trimmed line with no open section in effect.
pub fn classify(line: &str, table: &LabelTable) -> LineClass {
    if line.is_empty() || table.is_skipped(line) {
        return LineClass::Ignored;
    }
    if line.starts_with('#') {
        return LineClass::Boundary;
    }
    if table.lookup(line).is_some() {
        return LineClass::Body;
    }
    LineClass::Boundary
}

/// Text after the first `:`, trimmed. Empty when the line has no colon.
fn value_of(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("")
}

/// First whitespace token of the value parsed as an integer; every failure
/// (missing colon, empty value, non-numeric token) degrades to `1`.
fn int_value(line: &str) -> i64 {
    value_of(line)
        .split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .unwrap_or(1)
}

/// One in-progress record plus the active multi-line section flag.
struct Accumulator<'t> {
    table: &'t LabelTable,
    current: RawRecord,
    section: Option<SectionKind>,
    out: Vec<RawRecord>,
}

impl<'t> Accumulator<'t> {
    fn new(table: &'t LabelTable) -> Self {
        Accumulator {
            table,
            current: RawRecord::default(),
            section: None,
            out: Vec::new(),
        }
    }

    /// Flush the in-progress record iff it has a name, then restart from the
    /// boundary line (leading `#` markers stripped, whitespace trimmed).
    fn boundary(&mut self, line: &str) {
        if !self.current.name.is_empty() {
            self.out.push(std::mem::take(&mut self.current));
        }
        self.current = RawRecord::named(line.trim_start_matches('#').trim());
        self.section = None;
    }

    /// Apply a recognized label's rule. Any recognized label closes an open
    /// section; only `Section` labels open one.
    fn apply(&mut self, line: &str, rule: FieldRule) {
        self.section = None;
        match rule {
            FieldRule::Text(key) => {
                self.current.set(key, FieldValue::Text(value_of(line).to_owned()));
            }
            FieldRule::List(key) => {
                let items = value_of(line)
                    .split(',')
                    .map(|s| s.trim().to_owned())
                    .collect();
                self.current.set(key, FieldValue::List(items));
            }
            FieldRule::Int(key) => {
                self.current.set(key, FieldValue::Int(int_value(line)));
            }
            FieldRule::Section(kind) => {
                self.section = Some(kind);
            }
            FieldRule::Marker => {}
        }
    }

    /// Route a line reached while a section is open and no label matched.
    fn section_line(&mut self, line: &str, kind: SectionKind) {
        match kind {
            SectionKind::Description | SectionKind::Lore => {
                self.current.append_text(kind.key(), line);
            }
            // Quote sections keep only literal quoted lines, verbatim.
            SectionKind::Quotes => {
                if line.starts_with('"') {
                    self.current.push_list(kind.key(), line);
                }
            }
        }
    }

    fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        if line.is_empty() || self.table.is_skipped(line) {
            return;
        }
        if line.starts_with('#') {
            self.boundary(line);
            return;
        }
        if let Some(rule) = self.table.lookup(line) {
            self.apply(line, rule);
            return;
        }
        // Unlabeled line: section content while a section is open,
        // otherwise a new entity per the closed-world heuristic.
        match self.section {
            Some(kind) => self.section_line(line, kind),
            None => self.boundary(line),
        }
    }

    fn finish(mut self) -> Vec<RawRecord> {
        if !self.current.name.is_empty() {
            self.out.push(self.current);
        }
        self.out
    }
}

/// One linear pass over `text`, folding lines into raw records under the
/// given label table.
pub fn parse_records(text: &str, table: &LabelTable) -> Vec<RawRecord> {
    let mut acc = Accumulator::new(table);
    for line in text.lines() {
        acc.feed(line);
    }
    acc.finish()
}

/// Parse an ingredient document into raw records.
pub fn parse_ingredients(text: &str) -> Vec<RawRecord> {
    parse_records(text, &crate::labels::INGREDIENT_LABELS)
}

/// Parse a potion document into raw records.
pub fn parse_potions(text: &str) -> Vec<RawRecord> {
    parse_records(text, &crate::labels::POTION_LABELS)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
