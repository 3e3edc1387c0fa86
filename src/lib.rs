//! Terminal falling-block puzzle game.
//!
//! `core` holds the rule engine; `term` and `input` are the thin presentation
//! glue that turns snapshots into frames and key events into commands.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
