//! # SvgCut CAM Tools
//!
//! The cut-path optimization engine. It turns the flattened path data of a
//! CAD-to-SVG export into a laser-friendly cut plan.
//!
//! ## Processing stages
//!
//! - **Path Parser**: reads `M`/`L`/`A`/`Z` path data into segments
//! - **Segment Store**: canonical orientation and duplicate-edge removal
//! - **Path Builder**: rejoins fragments into maximal continuous chains
//! - **Tour Optimizer**: greedy nearest-neighbor cut ordering
//! - **Serializer**: renders chains back into path data
//!
//! [`CutOptimizer`] runs all stages for one drawing.

pub mod path_builder;
pub mod path_parser;
pub mod pipeline;
pub mod segment;
pub mod segment_store;
pub mod serializer;
pub mod tour;

// Re-export commonly used items
pub use path_builder::{build_chains, Chain, PathBuilder};
pub use path_parser::{parse_commands, parse_path_data, PathCommand, ParseSummary};
pub use pipeline::{CutInput, CutOptimizer, CutPlan, OptimizationStats};
pub use segment::{ArcShape, Segment, SegmentKind};
pub use segment_store::{InsertOutcome, SegmentId, SegmentStore};
pub use serializer::PathSerializer;
pub use tour::{Shape, ShapeKind, TourOptimizer};
