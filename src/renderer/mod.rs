//! Rendering module
//!
//! Pixels are drawn by an external backend; this module only describes
//! what a frame contains.

pub mod frame;

pub use frame::{Color, DrawCommand, build_frame};
