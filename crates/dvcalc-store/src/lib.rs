//! Data value store abstraction
//!
//! This crate provides:
//! - `DataValueStore`: the contract between a calculator and its source of data points
//! - `Predicate`: single-column filters usable both in memory and as store queries
//! - `WhereClauseBuilder`: SQL rendering of predicates for database-backed stores
//! - `InMemoryStore`: a keyed, shareable in-memory table of data points

pub mod memory;
pub mod predicate;
pub mod provider;
pub mod where_clause;

pub use memory::InMemoryStore;
pub use predicate::{Column, Operator, Predicate};
pub use provider::{DataValueStore, NoOpStore, StoreError, StoreResult};
pub use where_clause::WhereClauseBuilder;
