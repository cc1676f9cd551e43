//! Signature-based command dispatch.
//!
//! Each registered handler exposes a signature: a regular expression matched
//! case-insensitively against the whole input line. Handlers are tried in
//! registration order and the first match wins, so overlapping signatures must
//! be registered most specific first.

use chirp_core::errors::{ChirpError, Result};
use regex::{Regex, RegexBuilder};

/// Text returned for a line that matches no registered signature.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// A command the router can dispatch to.
pub trait CommandHandler: Send + Sync {
    /// Short stable name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Full-line pattern; capture groups become the arguments.
    fn signature(&self) -> &str;

    /// Run the command with the captured arguments.
    ///
    /// `Ok(None)` means the command produces no output.
    ///
    /// # Errors
    ///
    /// Any domain error raised by the command; the router passes it through.
    fn execute(&self, args: &[String]) -> Result<Option<String>>;
}

struct Route {
    matcher: Regex,
    handler: Box<dyn CommandHandler>,
}

/// Ordered registry of (compiled signature, handler) pairs.
#[derive(Default)]
pub struct CommandRouter {
    routes: Vec<Route>,
}

impl CommandRouter {
    /// Build a router from handlers, in the order given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSignature` if any signature fails to compile.
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Result<Self> {
        let mut router = Self::default();
        for handler in handlers {
            router.register(handler)?;
        }
        Ok(router)
    }

    /// Append a handler after every handler registered so far.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSignature` if the signature fails to compile.
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) -> Result<()> {
        let matcher = compile_signature(handler.as_ref())?;
        tracing::debug!(
            command = handler.name(),
            signature = handler.signature(),
            "command registered"
        );
        self.routes.push(Route { matcher, handler });
        Ok(())
    }

    /// Dispatch one line to the first handler whose signature matches.
    ///
    /// A line that matches nothing yields `Some(UNKNOWN_COMMAND)`, not an error.
    ///
    /// # Errors
    ///
    /// Whatever the matched handler returns, unchanged.
    pub fn handle(&self, line: &str) -> Result<Option<String>> {
        for route in &self.routes {
            let Some(captures) = route.matcher.captures(line) else {
                continue;
            };

            let args: Vec<String> = captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect();

            tracing::debug!(
                command = route.handler.name(),
                arg_count = args.len(),
                "command matched"
            );
            return route.handler.execute(&args);
        }

        tracing::debug!(line, "no command matched");
        Ok(Some(UNKNOWN_COMMAND.to_string()))
    }

    /// `(name, signature)` of each handler, in registration order.
    pub fn signatures(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.routes
            .iter()
            .map(|route| (route.handler.name(), route.handler.signature()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Compile a signature so it only ever matches the whole line, ignoring case.
fn compile_signature(handler: &dyn CommandHandler) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})$", handler.signature()))
        .case_insensitive(true)
        .build()
        .map_err(|err| ChirpError::InvalidSignature {
            command: handler.name().to_string(),
            reason: err.to_string(),
        })
}
