//! Cut optimization pipeline
//!
//! Runs the whole transformation for one drawing: parse every path into a
//! shared segment store, rebuild maximal chains, wrap chains and pass-through
//! elements as shapes, and order them for cutting.

use crate::path_builder::build_chains;
use crate::path_parser::{parse_path_data, ParseSummary};
use crate::segment_store::SegmentStore;
use crate::tour::{Shape, TourOptimizer};
use serde::Serialize;
use svgcut_core::{ParseError, Position};
use tracing::{info, warn};

/// One child of the drawing group, as seen by the optimizer
#[derive(Debug, Clone, PartialEq)]
pub enum CutInput<E> {
    /// Raw path-data text of a path element
    PathData(String),
    /// Any other element, with its entry and exit points if it has them
    Element {
        element: E,
        begin: Option<Position>,
        end: Option<Position>,
    },
}

impl<E> CutInput<E> {
    pub fn path(data: impl Into<String>) -> Self {
        Self::PathData(data.into())
    }

    /// An element entered and left at `seed`
    pub fn element(element: E, seed: Option<Position>) -> Self {
        Self::Element {
            element,
            begin: seed,
            end: seed,
        }
    }

    /// An element entered at `begin` and left at `end`
    pub fn element_between(element: E, begin: Position, end: Position) -> Self {
        Self::Element {
            element,
            begin: Some(begin),
            end: Some(end),
        }
    }
}

/// Counters describing one optimization run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptimizationStats {
    pub paths_read: usize,
    pub elements_passed_through: usize,
    pub elements_without_entry: usize,
    pub segments_offered: usize,
    pub segments_stored: usize,
    pub duplicates_removed: usize,
    pub degenerate_dropped: usize,
    pub unsupported_commands: usize,
    pub chains_built: usize,
    pub closed_chains: usize,
    /// Travel with elements in input order followed by chains in build order
    pub travel_before: f64,
    /// Travel in the optimized order
    pub travel_after: f64,
}

impl OptimizationStats {
    fn absorb(&mut self, summary: ParseSummary) {
        self.segments_offered += summary.segments_offered;
        self.segments_stored += summary.segments_stored;
        self.duplicates_removed += summary.duplicates;
        self.degenerate_dropped += summary.degenerate;
        self.unsupported_commands += summary.unsupported;
    }
}

/// Ordered shapes plus the statistics of the run that produced them
#[derive(Debug, Clone)]
pub struct CutPlan<E> {
    pub shapes: Vec<Shape<E>>,
    pub stats: OptimizationStats,
}

/// Entry point of the optimization engine
#[derive(Debug)]
pub struct CutOptimizer;

impl CutOptimizer {
    /// Optimize one drawing.
    ///
    /// Any malformed path data aborts the run with its [`ParseError`].
    pub fn optimize<E>(
        inputs: impl IntoIterator<Item = CutInput<E>>,
    ) -> Result<CutPlan<E>, ParseError> {
        let mut store = SegmentStore::new();
        let mut stats = OptimizationStats::default();
        let mut shapes = Vec::new();

        for input in inputs {
            match input {
                CutInput::PathData(data) => {
                    stats.absorb(parse_path_data(&data, &mut store)?);
                    stats.paths_read += 1;
                }
                CutInput::Element {
                    element,
                    begin,
                    end,
                } => {
                    stats.elements_passed_through += 1;
                    let shape = match (begin, end) {
                        (Some(begin), Some(end)) => Shape::element_between(element, begin, end),
                        (begin, _) => Shape::element(element, begin),
                    };
                    if shape.begin().is_none() {
                        stats.elements_without_entry += 1;
                    }
                    shapes.push(shape);
                }
            }
        }

        if stats.unsupported_commands > 0 {
            warn!(
                count = stats.unsupported_commands,
                "Skipped unsupported path commands"
            );
        }

        let chains = build_chains(&mut store);
        stats.chains_built = chains.len();
        stats.closed_chains = chains.iter().filter(|c| c.is_closed()).count();
        shapes.extend(chains.into_iter().map(Shape::path));

        stats.travel_before = TourOptimizer::travel_distance(&shapes);
        let shapes = TourOptimizer::order(shapes);
        stats.travel_after = TourOptimizer::travel_distance(&shapes);

        info!(
            paths = stats.paths_read,
            segments = stats.segments_stored,
            duplicates = stats.duplicates_removed,
            chains = stats.chains_built,
            travel_before = stats.travel_before,
            travel_after = stats.travel_after,
            "Optimized cut order"
        );

        Ok(CutPlan { shapes, stats })
    }
}
