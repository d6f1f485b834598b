//! CLI functionality for the dvcalc tool
//!
//! This module contains all CLI-related functionality including:
//! - Filter argument parsing
//! - Evaluation
//! - Working set inspection
//! - Where clause rendering
//! - Output formatting

pub mod clause;
pub mod evaluate;
pub mod filter;
pub mod inspect;
pub mod output;
