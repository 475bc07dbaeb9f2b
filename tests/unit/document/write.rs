use super::*;
use crate::document::parse::parse_document;

#[test]
fn writes_empty_elements_self_closing() {
    let root = DocumentNode::new("svg")
        .with_child(DocumentNode::new("circle").with_attr("r", "10"))
        .with_child(DocumentNode::new("g"));
    let out = write_document(&Document::from_root(root)).unwrap();
    assert_eq!(out, r#"<svg><circle r="10"/><g/></svg>"#);
}

#[test]
fn escapes_attribute_values_and_text() {
    let root = DocumentNode::new("svg").with_child(
        DocumentNode::new("text")
            .with_attr("title", "\"a\" & <b>")
            .with_text("1 < 2 & \"quoted\""),
    );
    let out = write_document(&Document::from_root(root)).unwrap();
    assert_eq!(
        out,
        r#"<svg><text title="&quot;a&quot; &amp; &lt;b&gt;">1 &lt; 2 &amp; "quoted"</text></svg>"#
    );
}

#[test]
fn reparse_of_written_document_is_identical() {
    let src = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE svg>\n<svg viewBox=\"0 0 10 10\">\n  <!-- shapes -->\n  <style><![CDATA[.a{fill:red}]]></style>\n  <path d=\"M0 0L10 10\"/>\n</svg>";
    let doc = parse_document(src).unwrap();
    let out = write_document(&doc).unwrap();
    assert_eq!(out, src);
    assert_eq!(parse_document(&out).unwrap(), doc);
}
