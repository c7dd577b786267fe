//! Rendering interface
//!
//! The engine never touches pixels. It hands the host an ordered list of
//! abstract draw commands built from a session snapshot.

pub mod draw;

pub use draw::{DrawCommand, Rect, Renderer, draw_list};
