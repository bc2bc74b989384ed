//! Display models for CLI output
//!
//! This module converts scan service responses into display formats.

pub mod display;

pub use display::{RenderedReport, ScoreTier, TestRowDisplay, TextTarget, render, render_for};
