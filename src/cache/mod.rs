//! Persistent package size cache
//!
//! A flat JSON object mapping package name to total release size in bytes.
//! The whole file is read at the start of a run and rewritten at the end.
//!
//! # Semantics
//!
//! - Entries never expire and are never evicted
//! - A failed lookup is stored as `0` and is not retried on later runs
//! - A crash mid-run leaves the file as of the last completed save

pub mod store;

pub use store::SizeCache;
