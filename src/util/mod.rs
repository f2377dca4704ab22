//! Utility helpers shared across site behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, third-party
//! scripts) from state logic to improve reuse and testability.

pub mod persistence;
pub mod reveal;
