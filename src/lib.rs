//! Anteater Facts Library
//!
//! This module exposes the CLI and facts modules for use in integration tests.

pub mod cli;
pub mod facts;
