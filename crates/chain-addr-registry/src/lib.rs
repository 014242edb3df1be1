//! The address format registry.
//!
//! A format is identified externally by its SLIP-44 coin type and a short
//! uppercase name. The table is built once at first use and never mutated;
//! lookups hand out `'static` references safe to share across threads.

#![forbid(unsafe_code)]

mod formats;

pub use formats::{by_coin_type, by_name, formats, Format};
