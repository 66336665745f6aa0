//! Cut segment types.
//!
//! A [`Segment`] is an undirected edge of the drawing. Canonical orientation
//! (`begin <= end`) is produced by [`Segment::normalized`], which returns a new
//! value instead of swapping fields in place.

use serde::{Deserialize, Serialize};
use svgcut_core::Position;

/// Orientation-dependent and orientation-invariant parameters of an
/// elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub radius_x: f64,
    pub radius_y: f64,
    /// X-axis rotation in degrees
    pub rotation: f64,
    /// Direction-invariant
    pub large_arc: bool,
    /// Direction-dependent: flips whenever the endpoints are swapped
    pub sweep: bool,
}

impl ArcShape {
    /// The same arc traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            sweep: !self.sweep,
            ..*self
        }
    }
}

/// Kind of a cut segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    Line,
    Arc(ArcShape),
}

/// A single line or elliptical-arc edge between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub begin: Position,
    pub end: Position,
    pub kind: SegmentKind,
}

impl Segment {
    /// Creates a line segment.
    pub fn line(begin: Position, end: Position) -> Self {
        Self {
            begin,
            end,
            kind: SegmentKind::Line,
        }
    }

    /// Creates an elliptical arc segment.
    pub fn arc(begin: Position, end: Position, shape: ArcShape) -> Self {
        Self {
            begin,
            end,
            kind: SegmentKind::Arc(shape),
        }
    }

    /// The same edge traversed from `end` to `begin`.
    pub fn reversed(&self) -> Self {
        let kind = match self.kind {
            SegmentKind::Line => SegmentKind::Line,
            SegmentKind::Arc(shape) => SegmentKind::Arc(shape.reversed()),
        };
        Self {
            begin: self.end,
            end: self.begin,
            kind,
        }
    }

    /// Canonical orientation of this edge, with `begin <= end`.
    pub fn normalized(&self) -> Self {
        if self.end < self.begin {
            self.reversed()
        } else {
            *self
        }
    }

    /// Whether both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    pub fn is_arc(&self) -> bool {
        matches!(self.kind, SegmentKind::Arc(_))
    }

    /// Straight-line distance between the endpoints
    pub fn chord_length(&self) -> f64 {
        self.begin.distance_to(&self.end)
    }
}
