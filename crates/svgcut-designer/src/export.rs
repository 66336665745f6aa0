//! Renders an ordered cut plan back into group children.

use crate::element::SvgElement;
use svgcut_camtools::{PathSerializer, Shape, ShapeKind};

/// Attributes copied onto every rebuilt `<path>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStyle {
    attributes: Vec<(String, String)>,
}

impl PathStyle {
    /// Take the presentation attributes of the first `<path>` child.
    ///
    /// `d` and `id` are never inherited.
    pub fn inherit_from<'a>(elements: impl IntoIterator<Item = &'a SvgElement>) -> Self {
        let attributes = elements
            .into_iter()
            .find(|el| el.local_name() == "path")
            .map(|el| {
                el.attributes
                    .iter()
                    .filter(|(key, _)| key != "d" && key != "id")
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Self { attributes }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    fn render_path(&self, data: &str) -> String {
        let mut out = String::from("<path");
        for (key, value) in &self.attributes {
            // A value holding `"` was single-quoted in the source.
            let quote = if value.contains('"') { '\'' } else { '"' };
            out.push_str(&format!(" {key}={quote}{value}{quote}"));
        }
        out.push_str(&format!(" d=\"{data}\"/>"));
        out
    }
}

/// Render the ordered shapes as group child markup.
///
/// Chains become `<path>` elements; every other element is emitted with its
/// original markup.
pub fn render_shapes(shapes: &[Shape<SvgElement>], style: &PathStyle) -> Vec<String> {
    shapes
        .iter()
        .map(|shape| match shape.kind() {
            ShapeKind::Path(chain) => style.render_path(&PathSerializer::serialize(chain)),
            ShapeKind::Element(element) => element.markup.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgcut_camtools::{Chain, Segment};
    use svgcut_core::Position;

    fn path_element(open_tag: &str) -> SvgElement {
        SvgElement::parse("path", open_tag, open_tag)
    }

    #[test]
    fn test_style_skips_d_and_id() {
        let elements = [
            SvgElement::parse("circle", r#"<circle cx="1" cy="1" fill="red"/>"#, ""),
            path_element(r#"<path id="a" d="M 0 0" stroke="black" stroke-width="0.1"/>"#),
            path_element(r#"<path stroke="blue"/>"#),
        ];
        let style = PathStyle::inherit_from(&elements);
        assert_eq!(
            style.attributes(),
            &[
                ("stroke".to_string(), "black".to_string()),
                ("stroke-width".to_string(), "0.1".to_string())
            ]
        );
    }

    #[test]
    fn test_inherited_quotes_survive_rendering() {
        let style = PathStyle::inherit_from(&[path_element(
            r#"<path style='font-family:"Arial"' class="cut" d="M 5 5"/>"#,
        )]);
        let chain = Chain::from_segments(vec![Segment::line(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
        )])
        .unwrap();

        let rendered = render_shapes(&[Shape::<SvgElement>::path(chain)], &style);
        assert_eq!(
            rendered[0],
            r#"<path style='font-family:"Arial"' class="cut" d="M 0 0 L 1 0"/>"#
        );

        let reread = path_element(&rendered[0]);
        assert_eq!(reread.attr("style"), Some(r#"font-family:"Arial""#));
        assert_eq!(reread.attr("class"), Some("cut"));
        assert_eq!(reread.attr("d"), Some("M 0 0 L 1 0"));
    }

    #[test]
    fn test_render_shapes() {
        let chain = Chain::from_segments(vec![Segment::line(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
        )])
        .unwrap();
        let text = SvgElement::parse("text", "<text>", "<text>A</text>");
        let shapes = vec![Shape::element(text, None), Shape::path(chain)];

        let style = PathStyle::inherit_from(&[path_element(r#"<path stroke="red" d="M 5 5"/>"#)]);
        assert_eq!(
            render_shapes(&shapes, &style),
            vec![
                "<text>A</text>".to_string(),
                r#"<path stroke="red" d="M 0 0 L 1 0"/>"#.to_string()
            ]
        );
        assert_eq!(
            render_shapes(&shapes[1..], &PathStyle::default()),
            vec![r#"<path d="M 0 0 L 1 0"/>"#.to_string()]
        );
    }
}
