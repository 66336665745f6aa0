//! Geometric value types shared across the workspace.

use crate::error::ParseError;
use crate::number::{format_decimal, parse_decimal, round_to_precision, to_key};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A point in drawing coordinates, rounded to the working precision.
///
/// Positions are compared by exact equality. Ordering is lexicographic on
/// `(x, y)`, which is the canonical orientation order for segments.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position, rounding both coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round_to_precision(x),
            y: round_to_precision(y),
        }
    }

    /// Parse a position from a pair of decimal tokens.
    pub fn parse(x: &str, y: &str) -> Result<Self, ParseError> {
        Ok(Self {
            x: parse_decimal(x)?,
            y: parse_decimal(y)?,
        })
    }

    /// Squared Euclidean distance to another position
    pub fn distance_squared(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Component-wise minimum
    pub fn min(&self, other: &Position) -> Position {
        Position {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Exact hashable key for this position
    pub fn key(&self) -> PositionKey {
        PositionKey(to_key(self.x), to_key(self.y))
    }

    /// Component-wise minimum over a set of positions, `None` when empty.
    pub fn min_of<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Option<Position> {
        positions.into_iter().fold(None, |acc, p| match acc {
            None => Some(*p),
            Some(m) => Some(m.min(p)),
        })
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_decimal(self.x), format_decimal(self.y))
    }
}

/// Integer image of a [`Position`], scaled by `10^PRECISION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey(pub i64, pub i64);
