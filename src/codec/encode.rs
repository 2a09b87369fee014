//! Structured value to tagged-sequence encoding.

use super::vocab::{TagVocabulary, close_tag, open_tag};
use crate::domain::StructuredValue;

/// Linearizes a structured value into a tagged sequence without touching
/// any vocabulary.
///
/// Objects emit one `<s_key>...</s_key>` block per entry in key order with
/// no separators; leaves emit their text form verbatim. The output is
/// identical to [`encode_growing`] for the same value.
pub fn encode(value: &StructuredValue) -> String {
    let mut out = String::new();
    write_value(value, &mut out, None);
    out
}

/// Linearizes a structured value, recording every field name's tag pair in
/// the vocabulary as a side effect.
///
/// This is the training-split form: it must run over every ground-truth
/// record before the tokenizer (and with it the embedding table size) is
/// fixed.
pub fn encode_growing(value: &StructuredValue, vocab: &mut TagVocabulary) -> String {
    let mut out = String::new();
    write_value(value, &mut out, Some(vocab));
    out
}

fn write_value(value: &StructuredValue, out: &mut String, mut vocab: Option<&mut TagVocabulary>) {
    match value {
        StructuredValue::Object(fields) => {
            for (key, inner) in fields {
                if let Some(vocab) = vocab.as_deref_mut() {
                    vocab.add_key(key);
                }
                out.push_str(&open_tag(key));
                write_value(inner, out, vocab.as_deref_mut());
                out.push_str(&close_tag(key));
            }
        }
        leaf => {
            // Leaf text is emitted verbatim, no escaping.
            if let Some(text) = leaf.leaf_text() {
                out.push_str(&text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StructuredValue;

    #[test]
    fn test_encode_flat_object() {
        let value =
            StructuredValue::from_json_str(r#"{"company":"ACME","total":"12.50"}"#).unwrap();
        let mut vocab = TagVocabulary::new();
        let encoded = encode_growing(&value, &mut vocab);
        assert_eq!(encoded, "<s_company>ACME</s_company><s_total>12.50</s_total>");
        for token in ["<s_company>", "</s_company>", "<s_total>", "</s_total>"] {
            assert!(vocab.contains(token));
        }
    }

    #[test]
    fn test_encode_nested_object() {
        let value = StructuredValue::from_json_str(
            r#"{"address":{"city":"Springfield","zip":"12345"}}"#,
        )
        .unwrap();
        assert_eq!(
            encode(&value),
            "<s_address><s_city>Springfield</s_city><s_zip>12345</s_zip></s_address>"
        );
    }

    #[test]
    fn test_encode_primitive_leaves_as_json_text() {
        let value =
            StructuredValue::from_json_str(r#"{"count":3,"paid":true,"note":null}"#).unwrap();
        assert_eq!(
            encode(&value),
            "<s_count>3</s_count><s_paid>true</s_paid><s_note>null</s_note>"
        );
    }

    #[test]
    fn test_encode_without_growth_matches_growing() {
        let value = StructuredValue::from_json_str(r#"{"a":{"b":"x"},"c":"y"}"#).unwrap();
        let mut vocab = TagVocabulary::new();
        assert_eq!(encode(&value), encode_growing(&value, &mut vocab));
    }

    #[test]
    fn test_repeated_growth_is_idempotent() {
        let value = StructuredValue::from_json_str(r#"{"a":"1","b":"2"}"#).unwrap();
        let mut vocab = TagVocabulary::new();
        encode_growing(&value, &mut vocab);
        let len_once = vocab.len();
        encode_growing(&value, &mut vocab);
        assert_eq!(vocab.len(), len_once);
    }

    #[test]
    fn test_encode_empty_object() {
        assert_eq!(encode(&StructuredValue::empty()), "");
    }
}
