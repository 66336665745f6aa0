use svgcut_camtools::CutOptimizer;
use svgcut_designer::{render_shapes, PathStyle, SvgDocument, SvgElement};

const LAYOUT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <g fill="none">
    <path class="cut" d="M 4 0 L 4 4"/>
    <path class="cut" d="M 0 0 L 4 0"/>
    <rect x="20" y="20" width="1" height="1"/>
  </g>
</svg>
"#;

#[test]
fn test_optimized_group_is_reread_unchanged() {
    let doc = SvgDocument::from_string(LAYOUT).unwrap();
    let span = doc.locate_group(None).unwrap();
    let children = doc.children(span).unwrap();
    let style = PathStyle::inherit_from(&children);

    let inputs = children
        .into_iter()
        .map(SvgElement::into_cut_input)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let plan = CutOptimizer::optimize(inputs).unwrap();
    let rendered = render_shapes(&plan.shapes, &style);
    assert_eq!(
        rendered,
        vec![
            r#"<path class="cut" d="M 0 0 L 4 0 L 4 4"/>"#.to_string(),
            r#"<rect x="20" y="20" width="1" height="1"/>"#.to_string(),
        ]
    );

    let output = doc.with_group_children(span, &rendered);
    let reread = output.children(output.locate_group(None).unwrap()).unwrap();
    let markup: Vec<&str> = reread.iter().map(|el| el.markup.as_str()).collect();
    assert_eq!(markup, rendered.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(output.content(), format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <g fill=\"none\">\n    {}\n    {}\n  </g>\n</svg>\n",
        rendered[0], rendered[1]
    ));
}
