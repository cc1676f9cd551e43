//! Subscriber installation
//!
//! All profiles write to stderr; stdout carries command output only.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Which subscriber `init` installs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Terse human output, warnings and errors only
    Console,
    /// Human output including per-operation debug events
    Development,
    /// JSON lines at info level
    Production,
    /// Bare registry; events are collected through `init_test_capture`
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Console => "chirp=warn",
            Profile::Development => "chirp=debug",
            Profile::Production => "chirp=info",
            Profile::Test => "off",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Profile::Console),
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!(
                "unknown log profile '{}' (expected console, development, production or test)",
                other
            )),
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn filter_for(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
}

/// Install the global subscriber for `profile`
///
/// Only the first call in a process has any effect. `RUST_LOG` replaces the
/// profile's default filter.
///
/// ```
/// use chirp_core::logging_facility::{init, Profile};
///
/// init(Profile::Console);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Console => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_for(profile))
                .with_target(false)
                .without_time()
                .compact()
                .init();
        }
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_for(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_for(profile))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
