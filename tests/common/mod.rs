//! Common test infrastructure for rawpix integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;

/// Install a test subscriber once per test binary; later calls are no-ops.
pub fn init_logging() {
    let _ = rawpix::telemetry::try_init("rawpix=debug");
}
