//! Tour Optimizer
//!
//! Orders shapes so the laser head travels as little as possible between
//! cuts, using a greedy nearest-neighbor heuristic over shape entry points.
//!
//! Shapes without an entry point keep their original relative order and are
//! placed ahead of everything else.

use crate::path_builder::Chain;
use svgcut_core::Position;
use tracing::debug;

/// What a shape carries into the output
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind<E> {
    /// An original non-path element, passed through unchanged
    Element(E),
    /// A path synthesized from a reconstructed chain
    Path(Chain),
}

/// A unit placed and ordered in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<E> {
    kind: ShapeKind<E>,
    begin: Option<Position>,
    end: Option<Position>,
}

impl<E> Shape<E> {
    /// Wrap an original element.
    ///
    /// `seed` is the element's natural start point, if its geometry has one;
    /// the cut leaves from the same point.
    pub fn element(element: E, seed: Option<Position>) -> Self {
        Self {
            kind: ShapeKind::Element(element),
            begin: seed,
            end: seed,
        }
    }

    /// Wrap an original element entered at `begin` and left at `end`.
    pub fn element_between(element: E, begin: Position, end: Position) -> Self {
        Self {
            kind: ShapeKind::Element(element),
            begin: Some(begin),
            end: Some(end),
        }
    }

    /// Wrap a reconstructed chain.
    pub fn path(chain: Chain) -> Self {
        Self {
            begin: Some(chain.begin()),
            end: Some(chain.end()),
            kind: ShapeKind::Path(chain),
        }
    }

    pub fn kind(&self) -> &ShapeKind<E> {
        &self.kind
    }

    pub fn into_kind(self) -> ShapeKind<E> {
        self.kind
    }

    pub fn begin(&self) -> Option<Position> {
        self.begin
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn is_path(&self) -> bool {
        matches!(self.kind, ShapeKind::Path(_))
    }
}

/// Greedy nearest-neighbor ordering of shapes
#[derive(Debug)]
pub struct TourOptimizer;

impl TourOptimizer {
    /// Order shapes for cutting.
    ///
    /// Begin-less shapes come first in their original order. The rest are
    /// visited starting from the component-wise minimum of their entry
    /// points; each step picks the shape whose `begin` is nearest to the
    /// previous shape's `end`. On an exact distance tie the smaller
    /// `begin.y` wins, then the earlier shape.
    pub fn order<E>(shapes: Vec<Shape<E>>) -> Vec<Shape<E>> {
        let (mut ordered, mut remaining): (Vec<_>, Vec<_>) =
            shapes.into_iter().partition(|s| s.begin.is_none());
        let fixed = ordered.len();

        let entries = remaining.iter().filter_map(|s| s.begin.as_ref());
        let Some(mut reference) = Position::min_of(entries) else {
            return ordered;
        };

        ordered.reserve(remaining.len());

        while !remaining.is_empty() {
            let mut best: Option<(usize, f64, f64)> = None;

            for (idx, shape) in remaining.iter().enumerate() {
                let Some(begin) = shape.begin else {
                    continue;
                };
                let dist = begin.distance_squared(&reference);
                let better = match best {
                    None => true,
                    Some((_, best_dist, best_y)) => {
                        dist < best_dist || (dist == best_dist && begin.y < best_y)
                    }
                };
                if better {
                    best = Some((idx, dist, begin.y));
                }
            }

            let Some((idx, _, _)) = best else {
                break;
            };

            let chosen = remaining.remove(idx);
            if let Some(end) = chosen.end {
                reference = end;
            }
            ordered.push(chosen);
        }

        debug!(fixed, toured = ordered.len() - fixed, "Ordered shapes");

        ordered
    }

    /// Total travel between consecutive shapes with entry points.
    ///
    /// Sums the distance from each shape's `end` to the next shape's `begin`,
    /// skipping shapes without an entry point.
    pub fn travel_distance<E>(shapes: &[Shape<E>]) -> f64 {
        let mut total = 0.0;
        let mut last_end: Option<Position> = None;

        for shape in shapes {
            let Some(begin) = shape.begin else {
                continue;
            };
            if let Some(from) = last_end {
                total += from.distance_to(&begin);
            }
            last_end = shape.end.or(Some(begin));
        }

        total
    }
}
