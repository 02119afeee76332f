//! Query modules for the tracker.
//!
//! Each module provides a read-only query struct that borrows the item
//! collection and derives data from the current snapshot.

pub mod reports;

pub use reports::ReportQuery;
