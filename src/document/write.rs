use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::{
    document::node::{Child, Document, DocumentNode, Misc},
    foundation::error::{SvgLineError, SvgLineResult},
};

/// Render a [`Document`] back to markup text.
///
/// Elements without children are written self-closing. Prolog items are emitted one per line
/// before the root element.
#[tracing::instrument(skip(doc), fields(root = %doc.root.name))]
pub fn write_document(doc: &Document) -> SvgLineResult<String> {
    let mut w = Writer::new(Vec::new());

    if let Some(decl) = &doc.declaration {
        emit(
            &mut w,
            Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )),
        )?;
        newline(&mut w)?;
    }
    for misc in &doc.prolog {
        let event = match misc {
            Misc::DocType(body) => Event::DocType(BytesText::from_escaped(body.as_str())),
            Misc::Comment(body) => Event::Comment(BytesText::from_escaped(body.as_str())),
            Misc::ProcessingInstruction(body) => Event::PI(BytesText::from_escaped(body.as_str())),
        };
        emit(&mut w, event)?;
        newline(&mut w)?;
    }

    write_node(&mut w, &doc.root)?;

    String::from_utf8(w.into_inner())
        .map_err(|e| SvgLineError::serialize(format!("output is not UTF-8: {e}")))
}

fn write_node(w: &mut Writer<Vec<u8>>, node: &DocumentNode) -> SvgLineResult<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (k, v) in node.attributes.iter() {
        start.push_attribute((k, v));
    }

    if node.children.is_empty() {
        return emit(w, Event::Empty(start));
    }

    emit(w, Event::Start(start))?;
    for child in &node.children {
        match child {
            Child::Element(e) => write_node(w, e)?,
            Child::Text(t) => emit(w, Event::Text(BytesText::from_escaped(partial_escape(t))))?,
            Child::CData(t) => emit(w, Event::CData(BytesCData::new(t.as_str())))?,
            Child::Comment(t) => emit(w, Event::Comment(BytesText::from_escaped(t.as_str())))?,
        }
    }
    emit(w, Event::End(BytesEnd::new(node.name.as_str())))
}

fn newline(w: &mut Writer<Vec<u8>>) -> SvgLineResult<()> {
    emit(w, Event::Text(BytesText::from_escaped("\n")))
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> SvgLineResult<()> {
    w.write_event(event)
        .map_err(|e| SvgLineError::serialize(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/document/write.rs"]
mod tests;
