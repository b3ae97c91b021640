//! Blocktris (workspace facade crate).
//!
//! The game rules live in `blocktris-core` and the shared data types in
//! `blocktris-types`; this package re-exports both as `blocktris::{core, types}`
//! and adds the settings file and the headless driver used by the binary.

pub use blocktris_core as core;
pub use blocktris_types as types;

pub mod driver;
pub mod settings;
