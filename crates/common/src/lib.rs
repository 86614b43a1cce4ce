//! Reusable utils shared by the workspace binaries, such as initializing the tracing
//! framework.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
