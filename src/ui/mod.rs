//! UI rendering module for Anteater Facts
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod fact_view;

pub use fact_view::render as render_fact_view;
