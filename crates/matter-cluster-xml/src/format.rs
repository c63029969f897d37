// crates/matter-cluster-xml/src/format.rs

//! Inlining passes over the indented writer output.
//!
//! The protocol tooling reading these files is sensitive to whitespace
//! inside text fields, so text nodes must sit directly against their tags.
//! The passes run in a fixed order; each one relies on the previous having
//! already collapsed its candidates.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// `<tag attrs>` on one line, excluding self-closing tags.
const OPEN_TAG: &str = r"<([A-Za-z_][\w.:-]*)((?:[ \t][^<>\n]*[^<>/\n])?)>";
const CLOSE_TAG: &str = r"</([A-Za-z_][\w.:-]*)>";

lazy_static! {
    /// Pass 1: open tag, one line of text, close tag.
    static ref TEXT_ONLY: Regex = Regex::new(&format!(
        r"{OPEN_TAG}\n[ \t]*([^<\s][^<\n]*?)[ \t]*\n[ \t]*{CLOSE_TAG}"
    ))
    .expect("text-only pattern is valid");

    /// Pass 2: a line of text followed by the first child element.
    static ref LEADING_TEXT: Regex = Regex::new(&format!(
        r"{OPEN_TAG}\n[ \t]*([^<\s][^<\n]*?)[ \t]*\n([ \t]*<[A-Za-z_])"
    ))
    .expect("leading-text pattern is valid");

    /// Pass 3: optional inline text, exactly one self-closing child, close tag.
    static ref SINGLE_EMPTY_CHILD: Regex = Regex::new(&format!(
        r"{OPEN_TAG}([^<\n]*)\n([ \t]*<[A-Za-z_][\w.:-]*(?:[ \t][^<>\n]*)?/>)\n[ \t]*{CLOSE_TAG}"
    ))
    .expect("single-child pattern is valid");
}

/// Applies the three inlining passes to indented XML.
///
/// 1. `<a>\n  text\n</a>` becomes `<a>text</a>`.
/// 2. `<a>\n  text\n  <b .../>` becomes `<a>text\n  <b .../>`.
/// 3. `<a>text\n  <b/>\n</a>` becomes `<a>text\n  <b/></a>`.
pub fn inline_text_nodes(xml: &str) -> String {
    let collapsed = collapse_text_only(xml);
    let pulled = pull_leading_text(&collapsed);
    close_after_single_child(&pulled)
}

fn collapse_text_only(xml: &str) -> String {
    TEXT_ONLY
        .replace_all(xml, |caps: &Captures| {
            if caps[1] == caps[4] {
                format!("<{}{}>{}</{}>", &caps[1], &caps[2], &caps[3], &caps[4])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// A match consumes the start of the following child, so a child's own
/// leading text is only reachable on the next round.
fn pull_leading_text(xml: &str) -> String {
    let mut current = xml.to_string();
    loop {
        let next = LEADING_TEXT
            .replace_all(&current, "<${1}${2}>${3}\n${4}")
            .into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn close_after_single_child(xml: &str) -> String {
    SINGLE_EMPTY_CHILD
        .replace_all(xml, |caps: &Captures| {
            if caps[1] == caps[5] {
                format!(
                    "<{}{}>{}\n{}</{}>",
                    &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
                )
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
