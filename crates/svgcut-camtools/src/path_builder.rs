//! Path Builder
//!
//! Drains a [`SegmentStore`] into maximal connected chains. Each chain is seeded
//! with the segment whose `begin` is nearest to the component-wise minimum
//! corner of what remains, then grown at both ends until no stored segment
//! touches either end.

use crate::segment::Segment;
use crate::segment_store::SegmentStore;
use serde::Serialize;
use std::collections::VecDeque;
use svgcut_core::Position;
use tracing::debug;

/// An ordered run of segments where each segment ends where the next begins.
///
/// A chain always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    /// Build a chain from connected segments.
    ///
    /// Returns `None` when `segments` is empty or two consecutive segments do
    /// not share an endpoint.
    pub fn from_segments(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() || !segments.windows(2).all(|w| w[0].end == w[1].begin) {
            return None;
        }
        Some(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Entry point: `begin` of the first segment
    pub fn begin(&self) -> Position {
        self.segments[0].begin
    }

    /// Exit point: `end` of the last segment
    pub fn end(&self) -> Position {
        self.segments[self.segments.len() - 1].end
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the chain returns to its entry point
    pub fn is_closed(&self) -> bool {
        self.begin() == self.end()
    }

    /// Sum of segment chord lengths
    pub fn cut_length(&self) -> f64 {
        self.segments.iter().map(Segment::chord_length).sum()
    }
}

/// Iterator draining a segment store into chains.
pub struct PathBuilder<'s> {
    store: &'s mut SegmentStore,
}

impl<'s> PathBuilder<'s> {
    pub fn new(store: &'s mut SegmentStore) -> Self {
        Self { store }
    }

    /// Take a segment that continues the chain past `tail`.
    fn take_after(&mut self, tail: &Position) -> Option<Segment> {
        self.store
            .take_starting_at(tail)
            .or_else(|| self.store.take_ending_at(tail).map(|s| s.reversed()))
    }

    /// Take a segment that leads into the chain at `head`.
    fn take_before(&mut self, head: &Position) -> Option<Segment> {
        self.store
            .take_ending_at(head)
            .or_else(|| self.store.take_starting_at(head).map(|s| s.reversed()))
    }
}

impl Iterator for PathBuilder<'_> {
    type Item = Chain;

    fn next(&mut self) -> Option<Chain> {
        let corner = self.store.min_begin()?;
        let seed = self.store.take_nearest_to(&corner)?;
        let mut segments = VecDeque::from([seed]);

        // A reversed prepend can expose a new match at the other end, so grow
        // until a full pass adds nothing.
        loop {
            let mut grew = false;

            while let Some(tail) = segments.back().map(|s| s.end) {
                let Some(next) = self.take_after(&tail) else {
                    break;
                };
                segments.push_back(next);
                grew = true;
            }

            while let Some(head) = segments.front().map(|s| s.begin) {
                let Some(prev) = self.take_before(&head) else {
                    break;
                };
                segments.push_front(prev);
                grew = true;
            }

            if !grew {
                break;
            }
        }

        debug!(
            segments = segments.len(),
            remaining = self.store.len(),
            "Built chain"
        );

        Some(Chain {
            segments: segments.into(),
        })
    }
}

/// Drain the store into chains, in construction order.
pub fn build_chains(store: &mut SegmentStore) -> Vec<Chain> {
    PathBuilder::new(store).collect()
}
