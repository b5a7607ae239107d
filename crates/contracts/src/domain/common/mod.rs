//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod translation;

// Re-exports
pub use aggregate_id::AggregateId;
pub use translation::Translation;
