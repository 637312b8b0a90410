//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, keyboard
//! events) from state logic to improve reuse and testability.

pub mod clock;
pub mod keys;
