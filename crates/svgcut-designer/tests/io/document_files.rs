use svgcut_core::DocumentError;
use svgcut_designer::SvgDocument;
use tempfile::TempDir;

#[test]
fn test_load_and_write_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("panel.svg");
    std::fs::write(&input, "<svg><g><path d=\"M 0 0 L 1 1\"/></g></svg>").unwrap();

    let doc = SvgDocument::load_from_file(&input).unwrap();
    let span = doc.locate_group(None).unwrap();
    let children = doc.children(span).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].attr("d"), Some("M 0 0 L 1 1"));

    let output = dir.path().join("panel_out.svg");
    doc.write_to_file(&output).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), doc.content());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        SvgDocument::load_from_file(&dir.path().join("absent.svg")),
        Err(DocumentError::Io(_))
    ));
}

#[test]
fn test_document_without_group() {
    let doc = SvgDocument::from_string("<svg><path d=\"M 0 0 L 1 1\"/></svg>").unwrap();
    assert!(matches!(
        doc.locate_group(None),
        Err(DocumentError::MissingGroup { id: None })
    ));
}

#[test]
fn test_unterminated_child() {
    let doc = SvgDocument::from_string("<svg><g><text>label</g></svg>").unwrap();
    let span = doc.locate_group(None).unwrap();
    assert!(matches!(
        doc.children(span),
        Err(DocumentError::UnterminatedElement { ref element }) if element == "text"
    ));
}
