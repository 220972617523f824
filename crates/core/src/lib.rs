//! distillara-core: extraction and canonical-schema core library.
//!
//! Turns loosely formatted flat-text ingredient and potion documents into
//! canonical nested entities tagged with a namespaced classification code
//! and a synthesized spatial context. Already-structured core-ruleset and
//! tier inputs bypass the parsing layer and only gain the canonical
//! envelope.
//!
//! # Public API
//!
//! - [`parse_ingredients`] / [`parse_potions`] -- text to raw records
//! - [`SchemaMapper`] -- raw records / structured sources to canonical
//!   entities, with injectable id and clock services
//! - [`spatial::resolve`] -- biome tagging and coordinate synthesis
//!
//! The core is best-effort by design: malformed or missing fields degrade
//! to fixed defaults and nameless records are dropped silently. No function
//! in this crate returns an error.

/// Canonical schema version stamped into every metadata block.
pub const SCHEMA_VERSION: &str = "1.0.0";
/// Fixed authorship attribution for synthesized metadata.
pub const CREATED_BY: &str = "Master Alchemist Elyndra Sael";
/// Fixed inspiration attribution for synthesized metadata.
pub const INSPIRED_BY: &str = "Arthenius Zaal";

pub mod labels;
pub mod parse;
pub mod record;
pub mod schema;
pub mod services;
pub mod spatial;

// ── Convenience re-exports: key types ────────────────────────────────

pub use labels::{FieldRule, LabelTable, SectionKind, INGREDIENT_LABELS, POTION_LABELS};
pub use record::{FieldValue, RawRecord};
pub use schema::{classification_code, SchemaMapper};
pub use services::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use spatial::SpatialContext;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use parse::{parse_ingredients, parse_potions, parse_records};
