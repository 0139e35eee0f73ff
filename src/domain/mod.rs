//! Core domain types and logic.

pub mod aggregator;
pub mod error;
pub mod report;
