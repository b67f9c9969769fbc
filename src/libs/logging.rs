//! Tracing setup.
//!
//! Output goes through the `msg_*` macros. In debug mode (`TASKMAN_DEBUG` or
//! `RUST_LOG` set) they emit tracing events, so a subscriber is installed here;
//! otherwise they print directly and no subscriber is needed.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "taskman=debug";

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
