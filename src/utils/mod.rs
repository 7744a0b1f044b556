//! # Utilities Module
//!
//! Shared value types used by both the assembler and the simulation shim.

pub mod color;

pub use color::*;
