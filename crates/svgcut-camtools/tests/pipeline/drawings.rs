use svgcut_camtools::{
    build_chains, parse_path_data, CutInput, CutOptimizer, PathSerializer, SegmentKind,
    SegmentStore, ShapeKind,
};
use svgcut_core::Position;

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn serialized_paths(plan_inputs: Vec<CutInput<&'static str>>) -> Vec<String> {
    let plan = CutOptimizer::optimize(plan_inputs).expect("drawing should optimize");
    plan.shapes
        .iter()
        .map(|s| match s.kind() {
            ShapeKind::Path(chain) => PathSerializer::serialize(chain),
            ShapeKind::Element(name) => name.to_string(),
        })
        .collect()
}

#[test]
fn test_two_connected_segments_become_one_path() {
    let paths = serialized_paths(vec![CutInput::path("M 0 0 L 1 0"), CutInput::path("M 1 0 L 1 1")]);
    assert_eq!(paths, vec!["M 0 0 L 1 0 L 1 1"]);
}

#[test]
fn test_reverse_duplicate_line_stored_once() {
    let mut store = SegmentStore::new();
    parse_path_data("M 2 2 L 0 0", &mut store).unwrap();
    parse_path_data("M 0 0 L 2 2", &mut store).unwrap();

    assert_eq!(store.len(), 1);
    let seg = store.iter().next().unwrap();
    assert_eq!(seg.begin, p(0.0, 0.0));
    assert_eq!(seg.end, p(2.0, 2.0));
}

#[test]
fn test_swapped_arc_sweep_flag() {
    let mut store = SegmentStore::new();
    parse_path_data("M 3 0 A 2 2 0 0 1 0 0", &mut store).unwrap();

    let seg = store.iter().next().unwrap();
    assert_eq!(seg.begin, p(0.0, 0.0));
    assert_eq!(seg.end, p(3.0, 0.0));
    match seg.kind {
        SegmentKind::Arc(shape) => assert!(!shape.sweep),
        SegmentKind::Line => panic!("expected arc"),
    }
}

#[test]
fn test_three_disjoint_segments() {
    let paths = serialized_paths(vec![
        CutInput::path("M 5 5 L 6 5"),
        CutInput::path("M 0 0 L 0 1"),
        CutInput::path("M 10 0 L 11 0"),
    ]);

    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0], "M 0 0 L 0 1");
}

#[test]
fn test_adjacent_faces_collapse_to_outline_and_divider() {
    // two squares sharing the x=1 edge, as a flattened export would emit them
    let mut store = SegmentStore::new();
    parse_path_data("M 0 0 L 1 0 L 1 1 L 0 1 Z", &mut store).unwrap();
    parse_path_data("M 1 0 L 2 0 L 2 1 L 1 1 Z", &mut store).unwrap();
    assert_eq!(store.len(), 7);

    let chains = build_chains(&mut store);
    let total: usize = chains.iter().map(|c| c.len()).sum();
    assert_eq!(total, 7);
    assert!(chains.len() <= 2);
}

#[test]
fn test_arc_chain_serializes_with_flags() {
    let paths = serialized_paths(vec![CutInput::path("M 0 0 A 5 5 0 1 0 10 0 L 10 -2")]);
    assert_eq!(paths, vec!["M 0 0 A 5 5 0 1 0 10 0 L 10 -2"]);
}

#[test]
fn test_unsupported_commands_do_not_break_chain() {
    let paths = serialized_paths(vec![CutInput::path("M 0 0 L 4 0 Q 5 5 6 6 L 4 3")]);
    assert_eq!(paths, vec!["M 0 0 L 4 0 L 4 3"]);
}

#[test]
fn test_fixed_elements_precede_paths() {
    let paths = serialized_paths(vec![
        CutInput::path("M 0 0 L 1 0"),
        CutInput::element("engraving", None),
        CutInput::element("hole", Some(p(50.0, 50.0))),
        CutInput::element("title", None),
    ]);

    assert_eq!(paths, vec!["engraving", "title", "M 0 0 L 1 0", "hole"]);
}

#[test]
fn test_distant_large_edges_are_kept_apart() {
    let mut store = SegmentStore::new();
    let summary = parse_path_data(
        "M 90000000000 0 L 90000000001 0 M 90000000002 0 L 90000000003 0",
        &mut store,
    )
    .unwrap();

    assert_eq!(summary.segments_stored, 2);
    assert_eq!(summary.duplicates, 0);
    assert_eq!(build_chains(&mut store).len(), 2);
}

#[test]
fn test_coordinates_beyond_key_range_are_rejected() {
    let mut store = SegmentStore::new();
    let err = parse_path_data(
        "M 1000000000000000 0 L 2000000000000000 0 M 3000000000000000 0 L 4000000000000000 0",
        &mut store,
    )
    .unwrap_err();

    assert!(matches!(err, svgcut_core::ParseError::InvalidNumber { .. }));
    assert!(store.is_empty());
}
