//! Record Source: reading input files into a [`crate::types::RecordSet`].
//!
//! Most callers should use [`read_sources`] (from [`unified`]) which:
//!
//! - checks every path (exists, regular file, `.csv` extension) before reading anything
//! - reads files in order and concatenates their rows
//! - optionally reports per-file success/failure/alerts to a [`SourceObserver`]
//!
//! Single-file helpers live under [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, LogObserver, SourceContext, SourceObserver, SourceSeverity, SourceStats,
};
pub use unified::{check_source, read_sources, SourceOptions, DEFAULT_EXTENSION};
