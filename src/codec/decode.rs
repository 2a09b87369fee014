//! Tagged-sequence to structured value decoding.
//!
//! Input here is model-generated text, not guaranteed well-formed, so the
//! parser is best-effort by contract: a missing close tag turns the rest of
//! the input into that field's value, content without any open tag becomes a
//! bare text leaf, and nothing ever errors.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vocab::close_tag;
use crate::domain::StructuredValue;

static OPEN_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<s_([^<>]+)>").expect("static regex"));

/// Removes separator spaces adjacent to tags: a single space directly after
/// a `>` and a single space directly before a `</s_` close tag.
///
/// The model is trained on sequences with no separators, but generation can
/// introduce a space between a text leaf and the following close tag (or
/// between tags), which would otherwise corrupt the adjacent leaf value.
/// Adjacency is judged against the original string, so only the space
/// touching the tag is removed from a longer run.
pub fn normalize_tag_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for (i, ch) in text.char_indices() {
        let skip = ch == ' '
            && (prev == Some('>') || text[i + ch.len_utf8()..].starts_with("</s_"));
        if !skip {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}

/// Decodes a tagged sequence into a structured value.
///
/// The input must already have generation markers stripped (see
/// [`strip_generation_markers`](super::strip_generation_markers), or use
/// [`decode_prediction`](super::decode_prediction) for the combined
/// pipeline). Decoding never fails; all leaves in the result are
/// string-typed.
pub fn decode(text: &str) -> StructuredValue {
    let normalized = normalize_tag_spacing(text);
    parse_fragment(&normalized)
}

fn parse_fragment(input: &str) -> StructuredValue {
    let mut rest = input;
    let mut fields: Vec<(String, StructuredValue)> = Vec::new();

    while let Some(caps) = OPEN_TAG_RE.captures(rest) {
        let (Some(tag), Some(key)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let key = key.as_str().to_string();
        let after_open = &rest[tag.end()..];

        // Match the close tag by key name; a missing close tag means the
        // sequence was truncated and the remainder is the value.
        let close = close_tag(&key);
        let (content, remainder) = match after_open.find(&close) {
            Some(idx) => (&after_open[..idx], &after_open[idx + close.len()..]),
            None => {
                tracing::warn!(key = key.as_str(), "unclosed tag, taking remainder as value");
                (after_open, "")
            }
        };

        let value = if OPEN_TAG_RE.is_match(content) {
            parse_fragment(content)
        } else {
            StructuredValue::String(content.trim().to_string())
        };
        fields.push((key, value));
        rest = remainder;
    }

    if !fields.is_empty() {
        StructuredValue::Object(fields)
    } else {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            StructuredValue::empty()
        } else {
            StructuredValue::String(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{TagVocabulary, encode_growing};

    fn obj(fields: Vec<(&str, StructuredValue)>) -> StructuredValue {
        StructuredValue::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn leaf(text: &str) -> StructuredValue {
        StructuredValue::String(text.to_string())
    }

    #[test]
    fn test_decode_flat_object() {
        let value = decode("<s_company>ACME</s_company><s_total>12.50</s_total>");
        assert_eq!(
            value,
            obj(vec![("company", leaf("ACME")), ("total", leaf("12.50"))])
        );
    }

    #[test]
    fn test_decode_nested_object() {
        let value = decode("<s_address><s_city>Springfield</s_city></s_address>");
        assert_eq!(
            value,
            obj(vec![("address", obj(vec![("city", leaf("Springfield"))]))])
        );
    }

    #[test]
    fn test_round_trip_string_leaves() {
        let original = StructuredValue::from_json_str(
            r#"{"company":"ACME Corp","items":{"name":"Widget","qty":"2"},"total":"12.50"}"#,
        )
        .unwrap();
        let mut vocab = TagVocabulary::new();
        let encoded = encode_growing(&original, &mut vocab);
        assert_eq!(decode(&encoded), original);
    }

    #[test]
    fn test_missing_close_tag_degrades_to_leaf() {
        assert_eq!(decode("<s_a>foo"), obj(vec![("a", leaf("foo"))]));
    }

    #[test]
    fn test_truncated_nested_sequence_yields_partial_tree() {
        let value = decode("<s_a>x</s_a><s_b><s_c>y");
        assert_eq!(
            value,
            obj(vec![("a", leaf("x")), ("b", obj(vec![("c", leaf("y"))]))])
        );
    }

    #[test]
    fn test_bare_text_becomes_string_leaf() {
        assert_eq!(decode("just some text"), leaf("just some text"));
    }

    #[test]
    fn test_empty_input_decodes_to_empty_object() {
        assert_eq!(decode(""), StructuredValue::empty());
        assert_eq!(decode("   "), StructuredValue::empty());
    }

    #[test]
    fn test_normalize_tag_spacing() {
        assert_eq!(
            normalize_tag_spacing("<s_a>foo </s_a> <s_b>bar</s_b>"),
            "<s_a>foo</s_a><s_b>bar</s_b>"
        );
        // Only the space touching the tag is a separator.
        assert_eq!(normalize_tag_spacing("<s_a>a b  </s_a>"), "<s_a>a b </s_a>");
        // Interior spaces in leaf text survive.
        assert_eq!(
            normalize_tag_spacing("<s_a>ACME Corp</s_a>"),
            "<s_a>ACME Corp</s_a>"
        );
    }

    #[test]
    fn test_decode_separator_spaces_do_not_corrupt_leaves() {
        let value = decode("<s_company>ACME Corp </s_company> <s_total>12.50</s_total>");
        assert_eq!(
            value,
            obj(vec![("company", leaf("ACME Corp")), ("total", leaf("12.50"))])
        );
    }

    #[test]
    fn test_stray_close_tag_is_text_content() {
        // A close tag with no matching open tag is plain content.
        assert_eq!(decode("foo</s_a>"), leaf("foo</s_a>"));
    }

    #[test]
    fn test_decode_multibyte_text() {
        let value = decode("<s_shop>Café 縁</s_shop>");
        assert_eq!(value, obj(vec![("shop", leaf("Café 縁"))]));
    }
}
