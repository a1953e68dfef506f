use anyhow::Result;
use chrono::SecondsFormat;
use clinic_site_lib::SitemapEntry;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Element names cannot contain spaces; row headers like "Last Modified" can.
fn tag_name(field: &str) -> String {
    field
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<()> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => write_text(writer, tag, if *b { "true" } else { "false" })?,
        serde_json::Value::Number(n) => write_text(writer, tag, &n.to_string())?,
        serde_json::Value::String(s) => write_text(writer, tag, s)?,
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for item in arr {
                write_value(writer, "item", item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, &tag_name(key), val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn into_string(writer: Writer<Cursor<Vec<u8>>>) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Serialize a slice of Serialize items into an XML string.
pub fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    into_string(writer)
}

/// A sitemaps.org `<urlset>` document.
pub fn sitemap_to_xml(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let urlset = BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]);
    writer.write_event(Event::Start(urlset))?;
    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text(&mut writer, "loc", &entry.loc)?;
        write_text(
            &mut writer,
            "lastmod",
            &entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text(&mut writer, "changefreq", &entry.change_frequency.to_string())?;
        write_text(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    into_string(writer)
}
