//! Core types and definitions for the QUAKEVIEW visualization.
//!
//! This crate defines the vocabulary shared across all other crates:
//! value types, playback commands, wire protocol DTOs, geometry snapshots,
//! input validation, and constants. It has no dependency on any runtime
//! framework or network layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod protocol;
pub mod state;
pub mod types;
pub mod validation;
