//! Chirp Engine - command routing layer
//!
//! Maps free-form command lines onto the feed services:
//! - `router`: signature registry with first-match dispatch
//! - `commands`: the built-in post, follows, wall and read commands
//! - `app`: default wiring of store, clock, services and router

pub mod app;
pub mod commands;
pub mod router;

pub use app::ChirpApp;
pub use router::{CommandHandler, CommandRouter, UNKNOWN_COMMAND};
