//! Terminal output.
//!
//! Quarry runs unattended, so the UI surface is just a mode-aware writer
//! with console styling. No prompts, no spinners.

pub mod output;

pub use output::{Output, OutputMode};
