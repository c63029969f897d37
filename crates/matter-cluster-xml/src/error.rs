// crates/matter-cluster-xml/src/error.rs

use core::fmt;
use quick_xml::Error as QuickXmlError;
use quick_xml::encoding::EncodingError;
use quick_xml::events::attributes::AttrError;
use std::io;

/// Errors that can occur while reading or writing configurator XML.
#[derive(Debug)]
pub enum XmlError {
    /// An error from the underlying `quick-xml` reader (syntax, mismatched tags).
    XmlReading(QuickXmlError),

    /// A malformed attribute (missing quotes, duplicate key, ...).
    Attribute(AttrError),

    /// Text or a name that is not valid in the document encoding.
    Encoding(EncodingError),

    /// The document ended while elements were still open.
    UnexpectedEof { open: String },

    /// The document contains no root element at all.
    MissingRoot,

    /// The root element is not `<configurator>`.
    UnexpectedRoot { found: String },

    /// A required element was missing (e.g. no cluster and no device type).
    MissingElement { element: &'static str },

    /// Writing the serialized document failed.
    XmlWriting(io::Error),
}

impl From<QuickXmlError> for XmlError {
    fn from(e: QuickXmlError) -> Self {
        XmlError::XmlReading(e)
    }
}

impl From<AttrError> for XmlError {
    fn from(e: AttrError) -> Self {
        XmlError::Attribute(e)
    }
}

impl From<EncodingError> for XmlError {
    fn from(e: EncodingError) -> Self {
        XmlError::Encoding(e)
    }
}

impl From<io::Error> for XmlError {
    fn from(e: io::Error) -> Self {
        XmlError::XmlWriting(e)
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlError::XmlReading(e) => write!(f, "XML parsing error: {}", e),
            XmlError::Attribute(e) => write!(f, "XML attribute error: {}", e),
            XmlError::Encoding(e) => write!(f, "XML encoding error: {}", e),
            XmlError::UnexpectedEof { open } => {
                write!(f, "Unexpected end of document, <{}> is not closed", open)
            }
            XmlError::MissingRoot => write!(f, "Document has no root element"),
            XmlError::UnexpectedRoot { found } => {
                write!(f, "Expected <configurator> root element, found <{}>", found)
            }
            XmlError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            XmlError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XmlError::XmlReading(e) => Some(e),
            XmlError::Attribute(e) => Some(e),
            XmlError::Encoding(e) => Some(e),
            XmlError::XmlWriting(e) => Some(e),
            _ => None,
        }
    }
}
