//! Xacro output for the robot description generator.
//!
//! [`XacroWriter`] renders the generator's directives as a `.urdf.xacro`
//! document into any writer; [`XacroFile`] wraps it to produce
//! `<output_dir>/<serial>.urdf.xacro` atomically.

pub mod file;
pub mod writer;

pub use file::{output_path, XacroFile};
pub use writer::{render_origin, XacroWriter, EXTENSION};
