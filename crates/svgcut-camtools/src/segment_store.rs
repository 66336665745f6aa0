//! Segment Store
//!
//! Holds canonicalized, deduplicated undirected segments. Flattened CAD exports
//! emit a shared edge once per adjoining face; storing every edge in canonical
//! orientation and rejecting equal `(begin, end)` pairs collapses those copies
//! without a tolerance comparison.
//!
//! Segments live in an owned slot pool. Two endpoint indices map a
//! [`PositionKey`] to the ids of the live segments starting or ending there, so
//! chain growth never scans the whole pool.

use crate::segment::{ArcShape, Segment};
use std::collections::{HashMap, HashSet};
use svgcut_core::{Position, PositionKey};

/// Identifier of a segment slot in the store
pub type SegmentId = usize;

/// Result of offering a segment to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The segment was stored under the given id
    Stored(SegmentId),
    /// An equal `(begin, end)` pair is already present
    Duplicate,
    /// Both endpoints coincide
    Degenerate,
}

/// Pool of live segments with endpoint lookup
#[derive(Debug, Default)]
pub struct SegmentStore {
    slots: Vec<Option<Segment>>,
    by_begin: HashMap<PositionKey, Vec<SegmentId>>,
    by_end: HashMap<PositionKey, Vec<SegmentId>>,
    pairs: HashSet<(PositionKey, PositionKey)>,
    live: usize,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line edge between two positions, in either order.
    pub fn insert_line(&mut self, start: Position, end: Position) -> InsertOutcome {
        self.insert(Segment::line(start, end))
    }

    /// Insert an elliptical arc edge.
    ///
    /// When `start > end` the endpoints are swapped and `sweep` flipped; radii,
    /// rotation and `large_arc` pass through unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn insert_arc(
        &mut self,
        start: Position,
        end: Position,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> InsertOutcome {
        self.insert(Segment::arc(
            start,
            end,
            ArcShape {
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
            },
        ))
    }

    /// Insert any segment through the canonicalization contract.
    pub fn insert(&mut self, segment: Segment) -> InsertOutcome {
        if segment.is_degenerate() {
            return InsertOutcome::Degenerate;
        }

        let segment = segment.normalized();
        let begin = segment.begin.key();
        let end = segment.end.key();

        if !self.pairs.insert((begin, end)) {
            return InsertOutcome::Duplicate;
        }

        let id = self.slots.len();
        self.slots.push(Some(segment));
        self.by_begin.entry(begin).or_default().push(id);
        self.by_end.entry(end).or_default().push(id);
        self.live += 1;

        InsertOutcome::Stored(id)
    }

    /// Number of live segments
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live segments, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.slots.iter().flatten()
    }

    /// Look up a live segment by id
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Component-wise minimum of `begin` over all live segments
    pub fn min_begin(&self) -> Option<Position> {
        Position::min_of(self.iter().map(|s| &s.begin))
    }

    /// Remove and return a segment whose stored `begin` equals `at`.
    pub fn take_starting_at(&mut self, at: &Position) -> Option<Segment> {
        let id = self.by_begin.get(&at.key())?.first().copied()?;
        self.take(id)
    }

    /// Remove and return a segment whose stored `end` equals `at`.
    pub fn take_ending_at(&mut self, at: &Position) -> Option<Segment> {
        let id = self.by_end.get(&at.key())?.first().copied()?;
        self.take(id)
    }

    /// Remove and return the segment whose `begin` is nearest to `target`.
    ///
    /// Ties resolve to the earliest inserted segment.
    pub fn take_nearest_to(&mut self, target: &Position) -> Option<Segment> {
        let mut best: Option<(SegmentId, f64)> = None;

        for (id, slot) in self.slots.iter().enumerate() {
            let Some(segment) = slot else {
                continue;
            };
            let dist = segment.begin.distance_squared(target);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((id, dist));
            }
        }

        let (id, _) = best?;
        self.take(id)
    }

    /// Remove a segment by id.
    pub fn take(&mut self, id: SegmentId) -> Option<Segment> {
        let segment = self.slots.get_mut(id)?.take()?;
        let begin = segment.begin.key();
        let end = segment.end.key();

        Self::unindex(&mut self.by_begin, begin, id);
        Self::unindex(&mut self.by_end, end, id);
        self.pairs.remove(&(begin, end));
        self.live -= 1;

        Some(segment)
    }

    fn unindex(index: &mut HashMap<PositionKey, Vec<SegmentId>>, key: PositionKey, id: SegmentId) {
        if let Some(ids) = index.get_mut(&key) {
            ids.retain(|&other| other != id);
            if ids.is_empty() {
                index.remove(&key);
            }
        }
    }
}
