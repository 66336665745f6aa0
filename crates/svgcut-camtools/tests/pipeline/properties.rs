use proptest::prelude::*;
use std::collections::HashSet;
use svgcut_camtools::{
    build_chains, parse_path_data, ArcShape, InsertOutcome, PathSerializer, Segment,
    SegmentStore, Shape, TourOptimizer,
};
use svgcut_core::{Position, PositionKey};

// Small half-unit grid so random segments share endpoints often.
fn position() -> impl Strategy<Value = Position> {
    (-6i32..6, -6i32..6).prop_map(|(x, y)| Position::new(x as f64 / 2.0, y as f64 / 2.0))
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        (position(), position()).prop_map(|(a, b)| Segment::line(a, b)),
        (position(), position(), 1u32..8, any::<bool>(), any::<bool>()).prop_map(
            |(a, b, r, large_arc, sweep)| {
                Segment::arc(
                    a,
                    b,
                    ArcShape {
                        radius_x: r as f64,
                        radius_y: r as f64,
                        rotation: 0.0,
                        large_arc,
                        sweep,
                    },
                )
            }
        ),
    ]
}

fn edge_key(segment: &Segment) -> (PositionKey, PositionKey) {
    let norm = segment.normalized();
    (norm.begin.key(), norm.end.key())
}

fn filled_store(segments: &[Segment]) -> SegmentStore {
    let mut store = SegmentStore::new();
    for seg in segments {
        store.insert(*seg);
    }
    store
}

proptest! {
    #[test]
    fn prop_both_orientations_store_one_entry(seg in segment()) {
        prop_assume!(!seg.is_degenerate());

        let mut store = SegmentStore::new();
        prop_assert!(matches!(store.insert(seg), InsertOutcome::Stored(_)));
        prop_assert_eq!(store.insert(seg.reversed()), InsertOutcome::Duplicate);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn prop_stored_segments_are_canonical(segments in prop::collection::vec(segment(), 0..40)) {
        let store = filled_store(&segments);

        let mut seen = HashSet::new();
        for seg in store.iter() {
            prop_assert!(seg.begin < seg.end);
            prop_assert!(seen.insert((seg.begin.key(), seg.end.key())));
        }
    }

    #[test]
    fn prop_chains_conserve_and_connect(segments in prop::collection::vec(segment(), 0..60)) {
        let mut store = filled_store(&segments);
        let expected: HashSet<_> = store.iter().map(edge_key).collect();
        let before = store.len();

        let chains = build_chains(&mut store);
        prop_assert!(store.is_empty());

        let mut consumed = HashSet::new();
        let mut count = 0;
        for chain in &chains {
            for pair in chain.segments().windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].begin);
            }
            for seg in chain.segments() {
                prop_assert!(consumed.insert(edge_key(seg)), "segment appears twice");
                count += 1;
            }
        }

        prop_assert_eq!(count, before);
        prop_assert_eq!(consumed, expected);
    }

    #[test]
    fn prop_serialized_chain_reparses_to_same_edges(segments in prop::collection::vec(segment(), 1..40)) {
        let mut store = filled_store(&segments);

        for chain in build_chains(&mut store) {
            let original: HashSet<_> = chain.segments().iter().map(edge_key).collect();
            let original_arcs: HashSet<_> = chain
                .segments()
                .iter()
                .map(|s| format!("{:?}", s.normalized()))
                .collect();

            let mut reparsed = SegmentStore::new();
            parse_path_data(&PathSerializer::serialize(&chain), &mut reparsed).unwrap();

            let keys: HashSet<_> = reparsed.iter().map(edge_key).collect();
            let full: HashSet<_> = reparsed.iter().map(|s| format!("{:?}", s)).collect();
            prop_assert_eq!(keys, original);
            prop_assert_eq!(full, original_arcs);
        }
    }

    #[test]
    fn prop_tour_visits_every_shape_once(
        seeds in prop::collection::vec(prop::option::of(position()), 0..30)
    ) {
        let shapes: Vec<Shape<usize>> = seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| Shape::element(i, *seed))
            .collect();

        let ordered = TourOptimizer::order(shapes);
        prop_assert_eq!(ordered.len(), seeds.len());

        let ids: Vec<usize> = ordered
            .iter()
            .map(|s| match s.kind() {
                svgcut_camtools::ShapeKind::Element(i) => *i,
                svgcut_camtools::ShapeKind::Path(_) => unreachable!(),
            })
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), seeds.len());

        let fixed: Vec<usize> = (0..seeds.len()).filter(|&i| seeds[i].is_none()).collect();
        prop_assert_eq!(&ids[..fixed.len()], &fixed[..]);
    }
}
