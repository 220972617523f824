//! Injected services for the schema mapper.
//!
//! Identifier generation and wall-clock capture sit behind traits so tests
//! can substitute deterministic stand-ins and assert exact output.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Source of run-unique entity identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Source of creation/update timestamps, formatted for the metadata block.
pub trait Clock {
    fn now(&self) -> String;
}

/// Default identifier source: random v4 UUIDs. Identifiers are deliberately
/// not derived from content, so re-running a transform on identical input
/// produces different ids.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Default clock: current UTC time as an RFC 3339 string.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default()
    }
}
