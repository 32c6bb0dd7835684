//! Interactive terminal client for MiniVector semantic search
//!
//! The session lives in [`app::App`]: query box, current result set, and the
//! article overlay. Network calls go through a background worker thread
//! ([`api::spawn_worker`]) so the UI never blocks; responses are drained once
//! per event-loop tick.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;

pub mod test_utils;
