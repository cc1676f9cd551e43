//! Default wiring of the feed engine.

use std::sync::Arc;

use chirp_core::clock::{Clock, SystemClock};
use chirp_core::errors::Result;
use chirp_core::ops::{shared_store, SharedStore, UserStore};

use crate::commands::builtin_handlers;
use crate::router::CommandRouter;

/// One store, one clock and a router with the built-in commands registered
pub struct ChirpApp {
    store: SharedStore,
    router: CommandRouter,
}

impl ChirpApp {
    /// Wire a fresh, empty store to the built-in commands.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSignature` if a built-in signature fails to compile.
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self> {
        let store = shared_store(UserStore::new());
        let router = CommandRouter::new(builtin_handlers(&store, clock))?;
        Ok(Self { store, router })
    }

    /// Same as [`ChirpApp::new`] with the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSignature` if a built-in signature fails to compile.
    pub fn with_system_clock() -> Result<Self> {
        Self::new(Arc::new(SystemClock))
    }

    /// Handle one command line.
    ///
    /// # Errors
    ///
    /// Domain errors raised by the matched command.
    pub fn handle(&self, line: &str) -> Result<Option<String>> {
        self.router.handle(line)
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}
