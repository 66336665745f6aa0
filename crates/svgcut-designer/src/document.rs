//! # SVG Document
//!
//! Loads an SVG document, locates the group holding the drawing and extracts
//! its child elements. The document is handled as text: only the group's
//! children are rewritten, and everything outside the group is written back
//! byte for byte.

use crate::element::SvgElement;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use svgcut_core::DocumentError;
use tracing::debug;

/// Byte range of a group element inside the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpan {
    /// First byte after the group's opening tag
    pub inner_start: usize,
    /// First byte of the group's closing tag
    pub inner_end: usize,
}

/// An SVG document held as text
#[derive(Debug, Clone)]
pub struct SvgDocument {
    content: String,
}

/// Regex matching opening, closing and self-closing tags of one element name
fn tag_regex(name: &str) -> Result<Regex, DocumentError> {
    Regex::new(&format!(r"<(/?){}(?:\s[^>]*)?>", regex::escape(name))).map_err(|_| {
        DocumentError::UnterminatedElement {
            element: name.to_string(),
        }
    })
}

/// Find the end of the element whose opening tag ends at `from`.
///
/// Returns `(close_start, close_end)` of the matching closing tag, honouring
/// nested elements of the same name.
fn find_matching_close(
    text: &str,
    from: usize,
    name: &str,
) -> Result<(usize, usize), DocumentError> {
    let re = tag_regex(name)?;
    let mut depth = 1usize;

    for caps in re.captures_iter(&text[from..]) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        let is_close = caps.get(1).is_some_and(|slash| !slash.as_str().is_empty());

        if is_close {
            depth -= 1;
            if depth == 0 {
                return Ok((from + tag.start(), from + tag.end()));
            }
        } else if !tag.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    Err(DocumentError::UnterminatedElement {
        element: name.to_string(),
    })
}

/// Tag name at the start of `tag` (which begins with `<`)
fn tag_name(tag: &str) -> &str {
    let rest = &tag[1..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    &rest[..end]
}

impl SvgDocument {
    /// Create a document from SVG text.
    pub fn from_string(content: impl Into<String>) -> Result<Self, DocumentError> {
        let content = content.into();
        if !content.contains("<svg") {
            return Err(DocumentError::NotSvg(
                "missing <svg> element".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Load a document from disk.
    pub fn load_from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "Loaded SVG document");
        Self::from_string(content)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Locate the group to transform.
    ///
    /// With an id, the `<g>` carrying that id; otherwise the first `<g>` that
    /// is not self-closing.
    pub fn locate_group(&self, id: Option<&str>) -> Result<GroupSpan, DocumentError> {
        let re = tag_regex("g")?;

        for caps in re.captures_iter(&self.content) {
            let Some(open) = caps.get(0) else {
                continue;
            };
            let is_close = caps.get(1).is_some_and(|slash| !slash.as_str().is_empty());
            if is_close || open.as_str().ends_with("/>") {
                continue;
            }

            if let Some(wanted) = id {
                let group = SvgElement::parse("g", open.as_str(), open.as_str());
                if group.attr("id") != Some(wanted) {
                    continue;
                }
            }

            let (close_start, _) = find_matching_close(&self.content, open.end(), "g")?;
            debug!(start = open.end(), end = close_start, "Located drawing group");
            return Ok(GroupSpan {
                inner_start: open.end(),
                inner_end: close_start,
            });
        }

        Err(DocumentError::MissingGroup {
            id: id.map(str::to_string),
        })
    }

    /// Top-level child elements of a group, in document order.
    ///
    /// Comments, processing instructions and text between children are
    /// skipped.
    pub fn children(&self, span: GroupSpan) -> Result<Vec<SvgElement>, DocumentError> {
        let inner = &self.content[span.inner_start..span.inner_end];
        let mut elements = Vec::new();
        let mut pos = 0;

        while let Some(rel) = inner[pos..].find('<') {
            let start = pos + rel;
            let rest = &inner[start..];

            if rest.starts_with("<!--") {
                let end = rest.find("-->").ok_or_else(|| DocumentError::UnterminatedElement {
                    element: "comment".to_string(),
                })?;
                pos = start + end + 3;
                continue;
            }

            let tag_len = rest.find('>').ok_or_else(|| DocumentError::UnterminatedElement {
                element: tag_name(rest).to_string(),
            })? + 1;
            let open_tag = &rest[..tag_len];

            if rest.starts_with("<?") || rest.starts_with("<!") {
                pos = start + tag_len;
                continue;
            }

            let name = tag_name(open_tag);
            let end = if open_tag.ends_with("/>") {
                start + tag_len
            } else {
                find_matching_close(inner, start + tag_len, name)?.1
            };

            elements.push(SvgElement::parse(name, open_tag, &inner[start..end]));
            pos = end;
        }

        debug!(count = elements.len(), "Extracted group children");
        Ok(elements)
    }

    /// Copy of the document with a group's children replaced.
    ///
    /// Children are written one per line, indented like the first original
    /// child; the closing tag keeps its original indentation.
    pub fn with_group_children(&self, span: GroupSpan, children: &[String]) -> SvgDocument {
        let inner = &self.content[span.inner_start..span.inner_end];
        let child_indent = leading_indent(inner).unwrap_or("  ");
        let close_indent = trailing_indent(inner);

        let mut out = String::with_capacity(self.content.len());
        out.push_str(&self.content[..span.inner_start]);
        for child in children {
            out.push('\n');
            out.push_str(child_indent);
            out.push_str(child);
        }
        out.push('\n');
        out.push_str(close_indent);
        out.push_str(&self.content[span.inner_end..]);
        SvgDocument { content: out }
    }

    /// Write the document to disk.
    pub fn write_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, &self.content)?;
        debug!(path = %path.display(), bytes = self.content.len(), "Wrote SVG document");
        Ok(())
    }
}

/// Indentation in front of the first element of a group body
fn leading_indent(inner: &str) -> Option<&str> {
    let first = inner.find('<')?;
    let line_start = inner[..first].rfind('\n').map_or(0, |i| i + 1);
    let indent = &inner[line_start..first];
    indent.chars().all(|c| c == ' ' || c == '\t').then_some(indent)
}

/// Indentation in front of a group's closing tag
fn trailing_indent(inner: &str) -> &str {
    let line_start = inner.rfind('\n').map_or(inner.len(), |i| i + 1);
    let indent = &inner[line_start..];
    if indent.chars().all(|c| c == ' ' || c == '\t') {
        indent
    } else {
        ""
    }
}

/// Output path next to the input: `<stem><suffix>.<ext>`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}
