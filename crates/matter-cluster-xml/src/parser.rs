// crates/matter-cluster-xml/src/parser.rs

use crate::error::XmlError;
use crate::model::Element;
use crate::resolver::resolve_configurator;
use crate::types::Configurator;
use crate::value::infer_value;
use log::warn;
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Parses a configurator XML string into the typed document tree.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full XML file.
///
/// # Errors
/// Returns an `XmlError` if the XML is malformed or the root element is not
/// `<configurator>`.
pub fn parse_configurator(xml_content: &str) -> Result<Configurator, XmlError> {
    // 1. Read the raw XML into the generic element tree (typing every value).
    let root = parse_element_tree(xml_content)?;

    // 2. Resolve the tree into the public document types.
    resolve_configurator(&root)
}

/// An element whose end tag has not been seen yet, plus its accumulated text.
struct OpenElement {
    element: Element,
    text: String,
}

/// Parses any XML string into the raw [`Element`] tree.
///
/// Attribute values and text nodes go through [`infer_value`]. Text chunks
/// of one element (including resolved entity references and CDATA) are
/// concatenated and trimmed; whitespace-only text becomes `None`. Comments,
/// processing instructions, the declaration and the doctype are dropped.
///
/// # Errors
/// Returns an `XmlError` on malformed markup, on a document that ends with
/// unclosed elements, or on a document without any root element.
pub fn parse_element_tree(xml_content: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().check_end_names = true;
    let decoder = reader.decoder();

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let element = start_element(&e, decoder)?;
                stack.push(OpenElement {
                    element,
                    text: String::new(),
                });
            }
            Event::Empty(e) => {
                let element = start_element(&e, decoder)?;
                attach(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml already verified that the end name matches.
                if let Some(open) = stack.pop() {
                    let mut element = open.element;
                    element.text = infer_value(open.text.trim());
                    attach(element, &mut stack, &mut root);
                }
            }
            Event::Text(t) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&t.decode()?);
                }
            }
            Event::CData(c) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&c.decode()?);
                }
            }
            Event::GeneralRef(r) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&resolve_reference(&r)?);
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof {
            open: open.element.name.clone(),
        });
    }

    root.ok_or(XmlError::MissingRoot)
}

/// Builds an element (without children or text yet) from a start tag.
fn start_element(e: &BytesStart<'_>, decoder: Decoder) -> Result<Element, XmlError> {
    let mut element = Element::new(decoder.decode(e.name().as_ref())?.into_owned());

    for attr in e.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let raw = attr.unescape_value()?;
        element.attributes.push((key, infer_value(&raw)));
    }

    Ok(element)
}

/// Hangs a finished element onto its parent, or makes it the root.
fn attach(element: Element, stack: &mut [OpenElement], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.element.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => warn!(
            "Ignoring <{}>: document already has a root element",
            element.name
        ),
    }
}

/// Resolves `&amp;`-style and `&#38;`-style references. Unknown named
/// entities are kept verbatim.
fn resolve_reference(r: &BytesRef<'_>) -> Result<String, XmlError> {
    if let Some(ch) = r.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = r.decode()?;
    Ok(match resolve_predefined_entity(&name) {
        Some(resolved) => resolved.to_string(),
        None => format!("&{};", name),
    })
}
