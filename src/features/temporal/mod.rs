//! Temporal expression resolution.
//!
//! Extracts clock times, relative offsets, named days, and recurring
//! intervals from free text and resolves them against a reference instant.

mod resolver;

pub use resolver::{
    resolve, strip_spans, IntervalUnit, NamedDay, RelativeUnit, TimeExpr, TimeMatch,
    DEFAULT_HOUR, MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES,
};
