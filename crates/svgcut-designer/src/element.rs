//! SVG element model and classification into optimizer inputs.

use regex::Regex;
use std::sync::LazyLock;
use svgcut_camtools::CutInput;
use svgcut_core::{parse_decimal, DocumentError, Position};

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-\w:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("invalid attribute regex")
});

/// A child element of the drawing group
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    /// Tag name, including any namespace prefix
    pub name: String,
    /// Attributes of the opening tag, in document order, values verbatim
    pub attributes: Vec<(String, String)>,
    /// The element's complete original markup
    pub markup: String,
}

impl SvgElement {
    /// Build an element from its opening tag and full markup.
    pub fn parse(name: &str, open_tag: &str, markup: &str) -> Self {
        // Skip "<name" so the tag name is never mistaken for an attribute.
        let attrs = open_tag.get(name.len() + 1..).unwrap_or_default();
        let attributes = ATTRIBUTE_RE
            .captures_iter(attrs)
            .map(|caps| {
                let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
                (caps[1].to_string(), value.to_string())
            })
            .collect();

        Self {
            name: name.to_string(),
            attributes,
            markup: markup.to_string(),
        }
    }

    /// Tag name without namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Value of an attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of an attribute that must be present
    pub fn require(&self, name: &str) -> Result<&str, DocumentError> {
        self.attr(name).ok_or_else(|| DocumentError::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// Numeric value of an attribute that must be present
    pub fn require_number(&self, name: &str) -> Result<f64, DocumentError> {
        let raw = self.require(name)?;
        parse_decimal(raw.trim()).map_err(|source| DocumentError::InvalidAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
            source,
        })
    }

    /// Position read from a pair of required numeric attributes
    pub fn require_position(&self, x: &str, y: &str) -> Result<Position, DocumentError> {
        Ok(Position {
            x: self.require_number(x)?,
            y: self.require_number(y)?,
        })
    }

    /// Classify this element for the optimizer.
    ///
    /// Paths hand over their path data. Circles and ellipses enter at their
    /// center, rectangles at their corner, lines at `(x1, y1)` leaving at
    /// `(x2, y2)`. Everything else has no entry point.
    pub fn into_cut_input(self) -> Result<CutInput<SvgElement>, DocumentError> {
        let local = self.local_name().to_owned();
        let input = match local.as_str() {
            "path" => CutInput::path(self.require("d")?),
            "circle" | "ellipse" => {
                let center = self.require_position("cx", "cy")?;
                CutInput::element(self, Some(center))
            }
            "rect" => {
                let corner = self.require_position("x", "y")?;
                CutInput::element(self, Some(corner))
            }
            "line" => {
                let begin = self.require_position("x1", "y1")?;
                let end = self.require_position("x2", "y2")?;
                CutInput::element_between(self, begin, end)
            }
            _ => CutInput::element(self, None),
        };
        Ok(input)
    }
}
