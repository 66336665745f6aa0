//! Path Serializer
//!
//! Renders a chain back into path mini-language text. Numbers always use a dot
//! as decimal separator and never an exponent, independent of locale.

use crate::path_builder::Chain;
use crate::segment::SegmentKind;
use svgcut_core::format_decimal;

/// Chain to path-data rendering
#[derive(Debug)]
pub struct PathSerializer;

impl PathSerializer {
    /// Render a chain as `M`, `L` and `A` commands.
    pub fn serialize(chain: &Chain) -> String {
        let mut out = format!("M {}", chain.begin());

        for segment in chain.segments() {
            let command = match segment.kind {
                SegmentKind::Line => format!(" L {}", segment.end),
                SegmentKind::Arc(shape) => format!(
                    " A {} {} {} {} {} {}",
                    format_decimal(shape.radius_x),
                    format_decimal(shape.radius_y),
                    format_decimal(shape.rotation),
                    u8::from(shape.large_arc),
                    u8::from(shape.sweep),
                    segment.end
                ),
            };
            out.push_str(&command);
        }

        out
    }
}
