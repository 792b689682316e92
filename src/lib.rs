//! Library entry for termtour exposing the runtime, routines and collaborators
//! for the binary and for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod console;
pub mod demos;
pub mod events;
pub mod state;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
