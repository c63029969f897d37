// crates/matter-cluster-xml/src/writer.rs

//! Writes the raw element tree as indented XML through quick-xml's
//! indenting [`Writer`].
//!
//! Elements holding only text are written on one line. In mixed content the
//! text node and every child element get their own line; [`crate::format`]
//! then pulls such text back onto its tag.

use crate::error::XmlError;
use crate::model::Element;
use crate::value::encode_value;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io;

/// The declaration written ahead of the root element.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Layout settings for [`write_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Whether to start the output with [`XML_DECLARATION`].
    pub declaration: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

/// Writes `root` and its subtree as an indented document.
///
/// # Errors
/// Returns [`XmlError::XmlWriting`] if the underlying writer fails.
pub fn write_document(root: &Element, config: &WriterConfig) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', config.indent);
    if config.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| XmlError::XmlWriting(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        if let Some(encoded) = encode_value(value.as_ref()) {
            start.push_attribute((key.as_str(), encoded.as_str()));
        }
    }

    let text = encode_value(element.text.as_ref());
    if element.children.is_empty() {
        let Some(text) = text else {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        };
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))))?;
        writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = text {
        writer.write_indent()?;
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))))?;
        // A text event suppresses the line break before the next tag.
        writer.write_indent()?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
