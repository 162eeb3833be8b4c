//! Rendering contract for mathtext layout trees.
//!
//! This crate provides:
//! - `RenderVisitor`, the trait a drawing backend implements
//! - `ship` and `render`, which walk a packed tree and call the visitor
//! - `DrawList`, a recording visitor with ink-bound measurement

pub mod draw_list;
mod error;
mod ship;
mod traits;
pub mod utils;

pub use draw_list::{DrawCommand, DrawList, InkBounds};
pub use error::RenderError;
pub use ship::{render, ship};
pub use traits::RenderVisitor;
