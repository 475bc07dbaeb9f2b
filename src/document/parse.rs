use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{
    document::node::{Child, Document, DocumentNode, Misc, XmlDecl},
    foundation::error::{SvgLineError, SvgLineResult},
};

/// Parse markup text into a [`Document`].
///
/// Whitespace inside the root element is kept verbatim; whitespace around it is dropped.
/// Anything that does not form exactly one balanced root element is a
/// [`SvgLineError::Markup`].
#[tracing::instrument(skip(src), fields(bytes = src.len()))]
pub fn parse_document(src: &str) -> SvgLineResult<Document> {
    let mut reader = Reader::from_str(src);
    reader.trim_text(false);

    let mut declaration = None;
    let mut prolog = Vec::new();
    let mut root: Option<DocumentNode> = None;
    let mut stack: Vec<DocumentNode> = Vec::new();

    loop {
        let pos = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| SvgLineError::markup(format!("at byte {pos}: {e}")))?;

        match event {
            Event::Start(e) => {
                ensure_single_root(&root, &stack, pos)?;
                stack.push(element_from_start(&e)?);
            }
            Event::Empty(e) => {
                ensure_single_root(&root, &stack, pos)?;
                let node = element_from_start(&e)?;
                attach(node, &mut stack, &mut root);
            }
            Event::End(e) => {
                let node = stack.pop().ok_or_else(|| {
                    SvgLineError::markup(format!(
                        "at byte {pos}: unexpected closing tag '{}'",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(node, &mut stack, &mut root);
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| SvgLineError::markup(format!("at byte {pos}: {err}")))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Child::Text(text.into_owned()));
                } else if !text.trim().is_empty() {
                    return Err(SvgLineError::markup(format!(
                        "at byte {pos}: text outside of the root element"
                    )));
                }
            }
            Event::CData(e) => {
                let Some(parent) = stack.last_mut() else {
                    return Err(SvgLineError::markup(format!(
                        "at byte {pos}: CDATA outside of the root element"
                    )));
                };
                parent.children.push(Child::CData(utf8(&e, pos)?));
            }
            Event::Comment(e) => {
                let body = utf8(&e, pos)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Child::Comment(body)),
                    None => prolog.push(Misc::Comment(body)),
                }
            }
            Event::Decl(e) => {
                declaration = Some(XmlDecl {
                    version: decl_field(e.version(), pos)?,
                    encoding: e.encoding().map(|v| decl_field(v, pos)).transpose()?,
                    standalone: e.standalone().map(|v| decl_field(v, pos)).transpose()?,
                });
            }
            Event::DocType(e) => {
                let body = utf8(&e, pos)?;
                prolog.push(Misc::DocType(body.trim_start().to_string()));
            }
            Event::PI(e) => {
                if stack.is_empty() {
                    prolog.push(Misc::ProcessingInstruction(utf8(&e, pos)?));
                }
            }
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(SvgLineError::markup(format!(
            "unexpected end of input: '{}' is not closed",
            open.name
        )));
    }
    let root = root.ok_or_else(|| SvgLineError::markup("document has no root element"))?;

    Ok(Document {
        declaration,
        prolog,
        root,
    })
}

fn element_from_start(e: &BytesStart<'_>) -> SvgLineResult<DocumentNode> {
    let mut node = DocumentNode::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            SvgLineError::markup(format!("bad attribute on '{}': {err}", node.name))
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|err| {
            SvgLineError::markup(format!("bad value for '{key}' on '{}': {err}", node.name))
        })?;
        node.attributes.set(key, value.into_owned());
    }
    Ok(node)
}

fn attach(node: DocumentNode, stack: &mut [DocumentNode], root: &mut Option<DocumentNode>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Child::Element(node)),
        None => *root = Some(node),
    }
}

fn ensure_single_root(
    root: &Option<DocumentNode>,
    stack: &[DocumentNode],
    pos: usize,
) -> SvgLineResult<()> {
    if root.is_some() && stack.is_empty() {
        return Err(SvgLineError::markup(format!(
            "at byte {pos}: more than one root element"
        )));
    }
    Ok(())
}

fn decl_field(v: Result<Cow<'_, [u8]>, quick_xml::Error>, pos: usize) -> SvgLineResult<String> {
    v.map(|b| String::from_utf8_lossy(&b).into_owned())
        .map_err(|e| SvgLineError::markup(format!("at byte {pos}: {e}")))
}

fn utf8(bytes: &[u8], pos: usize) -> SvgLineResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| SvgLineError::markup(format!("at byte {pos}: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
