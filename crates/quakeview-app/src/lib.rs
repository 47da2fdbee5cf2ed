//! QUAKEVIEW headless application shell.
//!
//! Wires the visualization engine to the outside world: the simulation
//! service client, the TTL response cache, and the frame loop thread that
//! drives the controller and publishes geometry snapshots.

pub mod cache;
pub mod client;
pub mod run_loop;
pub mod state;

pub use quakeview_core as core;
