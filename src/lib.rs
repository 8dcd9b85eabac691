pub mod collector;
pub mod core;
pub mod deps;
pub mod emitter;
pub mod error;
pub mod install;
pub mod logging;
pub mod prompt;
pub mod runner;
pub mod scaffold;
pub mod templates;
pub mod utils;
pub mod verify;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

// Re-export Platform enum so it can be used in tests
pub use runner::Platform;
