//! zpick - interactive zellij session picker
//!
//! Library crate exposing the components used by the binary: loaders for
//! layouts and sessions, the picker state machine and the exec handoff.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod config;
pub mod error;
pub mod exec;
pub mod process;
pub mod sources;

pub mod ui;

pub use error::{Error, Result};
