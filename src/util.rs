//! Byte-level helpers for reading HTML input.

use std::borrow::Cow;

/// How far into a document a charset declaration is looked for.
const SNIFF_WINDOW: usize = 1024;

/// Decode HTML bytes to text.
///
/// Valid UTF-8 (with or without BOM) is taken as is. Otherwise the declared
/// charset is used when `encoding_rs` knows its label, and Windows-1252 when
/// it does not.
pub fn decode_text<'a>(bytes: &'a [u8], hint: Option<&str>) -> Cow<'a, str> {
    let (text, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return text;
    }

    let encoding = hint
        .and_then(|label| encoding_rs::Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(encoding_rs::WINDOWS_1252);
    log::debug!("input is not UTF-8, decoding as {}", encoding.name());
    let (text, _, _) = encoding.decode(bytes);
    text
}

/// Charset declared near the start of a document.
///
/// Recognizes `<?xml ... encoding="..."?>`, `<meta charset="...">` and the
/// `charset=` parameter of a `<meta http-equiv>` content type.
pub fn sniff_charset(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    xml_encoding(head).or_else(|| meta_charset(head))
}

fn xml_encoding(head: &[u8]) -> Option<&str> {
    let start = find(head, b"<?xml")?;
    let decl = &head[start..];
    let decl = &decl[..find(decl, b"?>").unwrap_or(decl.len())];
    attribute_value(decl, b"encoding=")
}

fn meta_charset(head: &[u8]) -> Option<&str> {
    let mut rest = head;
    while let Some(start) = find(rest, b"<meta") {
        let tag = &rest[start..];
        let tag = &tag[..tag.iter().position(|&b| b == b'>').unwrap_or(tag.len())];
        if let Some(charset) = attribute_value(tag, b"charset=") {
            return Some(charset);
        }
        rest = &rest[start + tag.len()..];
    }
    None
}

/// Value after `key` (matched case-insensitively), quoted or bare.
fn attribute_value<'a>(haystack: &'a [u8], key: &[u8]) -> Option<&'a str> {
    let at = find(haystack, key)?;
    let after = &haystack[at + key.len()..];
    let value = match after.first()? {
        &quote @ (b'"' | b'\'') => {
            let quoted = &after[1..];
            &quoted[..quoted.iter().position(|&b| b == quote)?]
        }
        _ => {
            let end = after
                .iter()
                .position(|&b| {
                    matches!(b, b'"' | b'\'' | b';' | b'/' | b'>') || b.is_ascii_whitespace()
                })
                .unwrap_or(after.len());
            &after[..end]
        }
    };
    let value = std::str::from_utf8(value).ok()?.trim();
    (!value.is_empty()).then_some(value)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
