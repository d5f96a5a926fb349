//! Platform abstraction layer
//!
//! Host-side pieces that sit around the simulation:
//! - Frame clock (timestamps to frame deltas)
//! - Input policy (one key drives start, jump and restart)
//! - Browser canvas surface (wasm32 only)

pub mod clock;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FrameClock;
pub use input::{Activation, activate};
