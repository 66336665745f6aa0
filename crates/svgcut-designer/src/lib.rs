//! # SvgCut Designer
//!
//! SVG document handling for the cut optimizer: locating the drawing group,
//! classifying its children, and rendering the optimized order back.

pub mod document;
pub mod element;
pub mod export;

pub use document::{derive_output_path, GroupSpan, SvgDocument};
pub use element::SvgElement;
pub use export::{render_shapes, PathStyle};
