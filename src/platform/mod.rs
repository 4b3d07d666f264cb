//! Platform abstraction layer
//!
//! Host-independent pieces of the outer loop:
//! - Input: key names to movement intent
//! - Time: frame timestamps to step deltas
//!
//! The browser wiring (`requestAnimationFrame`, key listeners) lives in the
//! binary entry point.

pub mod clock;
pub mod input;

pub use clock::{FrameClock, MAX_FRAME_DELTA_MS};
pub use input::{InputAdapter, KeyAction};
