//! Response formatting
//!
//! Pure functions that turn the raw response text into alternate views.
//! Every function here is total: parse failures come back as a fixed
//! placeholder string instead of an error, so the display surface can
//! always render something.

use crate::types::FormattedView;
use anyhow::{bail, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use quick_xml::Writer;
use serde_json::Value;

pub const INVALID_JSON: &str = "Invalid JSON";
pub const INVALID_XML: &str = "Invalid XML";

/// Indent width used by both pretty-printers
const INDENT: usize = 2;

impl FormattedView {
    /// Render `raw` in this view. Recomputed on every call, nothing is cached.
    pub fn render(self, raw: &str) -> String {
        match self {
            FormattedView::Raw => raw.to_string(),
            FormattedView::Json => format_json(raw),
            FormattedView::Xml => format_xml(raw),
            FormattedView::Html => format_html(raw),
        }
    }
}

/// Re-indent a JSON document, keeping keys in the order they were parsed
pub fn format_json(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| INVALID_JSON.to_string()),
        Err(_) => INVALID_JSON.to_string(),
    }
}

/// Re-indent an XML document with a single root element
pub fn format_xml(text: &str) -> String {
    match pretty_xml(text) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::debug!("XML formatting failed: {e}");
            INVALID_XML.to_string()
        }
    }
}

/// HTML is only relabelled, never rewritten
pub fn format_html(text: &str) -> String {
    text.to_string()
}

fn pretty_xml(text: &str) -> Result<String> {
    let mut reader = NsReader::from_str(text);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        if let ResolveResult::Unknown(_) = resolved {
            bail!("element uses an undeclared namespace prefix");
        }

        match event {
            Event::Eof => break,
            // The serialized document carries no declaration
            Event::Decl(_) => {}
            Event::Start(e) => {
                if depth == 0 && seen_root {
                    bail!("more than one root element");
                }
                check_element(&reader, &e)?;
                seen_root = true;
                depth += 1;
                writer.write_event(Event::Start(e))?;
            }
            Event::Empty(e) => {
                if depth == 0 && seen_root {
                    bail!("more than one root element");
                }
                check_element(&reader, &e)?;
                seen_root = true;
                writer.write_event(Event::Empty(e))?;
            }
            Event::End(e) => {
                if depth == 0 {
                    bail!("closing tag without a matching opening tag");
                }
                depth -= 1;
                writer.write_event(Event::End(e))?;
            }
            // Layout whitespace between tags is replaced by the writer's indentation
            Event::Text(e) if e.iter().all(u8::is_ascii_whitespace) => {}
            Event::Text(e) => {
                if depth == 0 {
                    bail!("text outside the root element");
                }
                e.unescape()?;
                writer.write_event(Event::Text(e))?;
            }
            Event::CData(e) => {
                if depth == 0 {
                    bail!("CDATA outside the root element");
                }
                writer.write_event(Event::CData(e))?;
            }
            other => writer.write_event(other)?,
        }
    }

    if !seen_root {
        bail!("document has no root element");
    }
    if depth != 0 {
        bail!("{depth} element(s) left unclosed");
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Element and attribute names must be well formed and their prefixes declared
fn check_element(reader: &NsReader<&[u8]>, element: &BytesStart) -> Result<()> {
    check_name(element.name().as_ref())?;

    for attr in element.attributes() {
        let attr = attr?;
        check_name(attr.key.as_ref())?;
        if let (ResolveResult::Unknown(_), _) = reader.resolve_attribute(attr.key) {
            bail!(
                "attribute {:?} uses an undeclared namespace prefix",
                String::from_utf8_lossy(attr.key.as_ref())
            );
        }
    }

    Ok(())
}

fn check_name(name: &[u8]) -> Result<()> {
    let name = std::str::from_utf8(name)?;
    match name.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => Ok(()),
        _ => bail!("invalid name {name:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_reindents() {
        let formatted = format_json(r#"{"a":1}"#);
        assert_eq!(formatted, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_format_json_keeps_key_order() {
        let formatted = format_json(r#"{"zeta":1,"alpha":{"b":[1,2],"a":null}}"#);
        let zeta = formatted.find("zeta").unwrap();
        let alpha = formatted.find("alpha").unwrap();
        assert!(zeta < alpha);
        let b = formatted.find("\"b\"").unwrap();
        let a = formatted.find("\"a\"").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_format_json_invalid() {
        assert_eq!(format_json("not json"), INVALID_JSON);
        assert_eq!(format_json(""), INVALID_JSON);
        assert_eq!(format_json("{\"a\":"), INVALID_JSON);
    }

    #[test]
    fn test_format_json_keeps_big_numbers_verbatim() {
        assert_eq!(
            format_json(r#"{"id":12345678901234567890123}"#),
            "{\n  \"id\": 12345678901234567890123\n}"
        );
        assert_eq!(format_json("[1.50]"), "[\n  1.50\n]");
    }

    #[test]
    fn test_format_json_scalar_document() {
        assert_eq!(format_json("42"), "42");
        assert_eq!(format_json("\"x\""), "\"x\"");
    }

    #[test]
    fn test_format_xml_nested() {
        assert_eq!(format_xml("<a><b/></a>"), "<a>\n  <b/>\n</a>");
    }

    #[test]
    fn test_format_xml_text_stays_inline() {
        let formatted = format_xml("<a><b>hi</b></a>");
        assert_eq!(formatted, "<a>\n  <b>hi</b>\n</a>");
    }

    #[test]
    fn test_format_xml_drops_declaration() {
        let formatted = format_xml("<?xml version=\"1.0\"?><root x=\"1\"/>");
        assert_eq!(formatted, "<root x=\"1\"/>");
    }

    #[test]
    fn test_format_xml_keeps_mixed_content_spacing() {
        assert_eq!(
            format_xml("<p>Hello <b>world</b> again</p>"),
            "<p>Hello <b>world</b> again</p>"
        );
        assert_eq!(
            format_xml("<msg>  two  spaces  </msg>"),
            "<msg>  two  spaces  </msg>"
        );
    }

    #[test]
    fn test_format_xml_reindents_layout_whitespace() {
        let formatted = format_xml("<a>\n\t\t<b/>\n      <c>x</c>\n</a>\n");
        assert_eq!(formatted, "<a>\n  <b/>\n  <c>x</c>\n</a>");
    }

    #[test]
    fn test_format_xml_rejects_bad_name_start() {
        assert_eq!(format_xml("<1a/>"), INVALID_XML);
        assert_eq!(format_xml(r#"<a 1x="v"/>"#), INVALID_XML);
    }

    #[test]
    fn test_format_xml_rejects_undeclared_prefix() {
        assert_eq!(format_xml("<x:a/>"), INVALID_XML);
        assert_eq!(format_xml(r#"<a y:k="v"/>"#), INVALID_XML);
    }

    #[test]
    fn test_format_xml_accepts_declared_prefix() {
        let formatted = format_xml(r#"<x:a xmlns:x="urn:x"><x:b x:k="v"/></x:a>"#);
        assert_eq!(
            formatted,
            "<x:a xmlns:x=\"urn:x\">\n  <x:b x:k=\"v\"/>\n</x:a>"
        );
    }

    #[test]
    fn test_format_xml_unclosed() {
        assert_eq!(format_xml("<a>"), INVALID_XML);
    }

    #[test]
    fn test_format_xml_mismatched_tags() {
        assert_eq!(format_xml("<a></b>"), INVALID_XML);
    }

    #[test]
    fn test_format_xml_rejects_non_xml() {
        assert_eq!(format_xml(""), INVALID_XML);
        assert_eq!(format_xml("plain text"), INVALID_XML);
        assert_eq!(format_xml(r#"{"a":1}"#), INVALID_XML);
    }

    #[test]
    fn test_format_xml_rejects_two_roots() {
        assert_eq!(format_xml("<a/><b/>"), INVALID_XML);
    }

    #[test]
    fn test_format_xml_rejects_duplicate_attribute() {
        assert_eq!(format_xml(r#"<a x="1" x="2"/>"#), INVALID_XML);
    }

    #[test]
    fn test_format_xml_allows_comments_around_root() {
        let formatted = format_xml("<!-- c --><a/>");
        assert!(formatted.contains("<a/>"));
        assert_ne!(formatted, INVALID_XML);
    }

    #[test]
    fn test_format_html_passthrough() {
        for input in ["<p>hi", "", "not html at all", "{\"a\":1}"] {
            assert_eq!(format_html(input), input);
        }
    }

    #[test]
    fn test_render_dispatches_by_view() {
        let raw = r#"{"a":1}"#;
        assert_eq!(FormattedView::Raw.render(raw), raw);
        assert_eq!(FormattedView::Json.render(raw), format_json(raw));
        assert_eq!(FormattedView::Xml.render(raw), INVALID_XML);
        assert_eq!(FormattedView::Html.render(raw), raw);
    }
}
