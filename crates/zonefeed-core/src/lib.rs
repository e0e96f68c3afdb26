//! zonefeed-core — parking-zone normalization core.
//!
//! This crate turns provider-neutral [`RawZone`]s into
//! [`CanonicalZoneRecord`]s. Each stage of the pipeline is a public module:
//!
//! ```text
//!                 ┌─► duration / price / timestamp ─┐
//! RawZone ─► modifiers ─► schedule ──────────────────┴─► tariff ─┐
//!    └─────► geometry ───────────────────────────────────────────┴─► record
//! ```
//!
//! Everything is synchronous and pure apart from `tracing` diagnostics. Zones
//! are processed strictly in input order.

pub mod config;
pub mod duration;
pub mod error;
pub mod geometry;
pub mod modifiers;
pub mod price;
pub mod record;
pub mod schedule;
pub mod tariff;
pub mod timestamp;
pub mod types;

#[cfg(test)]
mod test_logs;

pub use error::{NormalizeError, Result};
pub use record::{build_record, normalize_batch, RawZone, TariffSource};
pub use types::{CanonicalRegion, CanonicalZoneRecord, Coordinate, TariffRule, TimeWindow, WeekdaySet};
