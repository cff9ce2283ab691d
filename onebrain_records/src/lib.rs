#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Record identity, normalization, and fallback extraction.
//!
//! Everything here is deliberately free of network concerns: the
//! resolver talks to the store through the `VectorIndex` trait and the
//! remaining modules are pure functions over record text.

pub mod activity;
pub mod extract;
pub mod ingest;
pub mod normalize;
pub mod resolve;
pub mod view;

pub use activity::append_activity;
pub use extract::{FieldPatterns, extract};
pub use ingest::{IngestEntry, IngestReport, build_record, build_records};
pub use normalize::id_variants;
pub use resolve::RecordResolver;
pub use view::RecordView;
