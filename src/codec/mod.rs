//! Bidirectional mapping between structured values and tagged token
//! sequences.
//!
//! The target format wraps every field in an open/close tag pair derived
//! from the field name: `{"total":"12.50"}` becomes
//! `<s_total>12.50</s_total>`. Nested objects nest their tags; leaves are
//! emitted verbatim with no escaping, so leaf text containing tag-like
//! substrings is ambiguous by design (an accepted limitation of the
//! format).
//!
//! Decoding runs on free-form model output and therefore never fails:
//! unmatched tags degrade to text leaves and truncated sequences yield
//! partial trees.

mod cleanup;
mod decode;
mod encode;
pub mod vocab;

pub use cleanup::strip_generation_markers;
pub use decode::{decode, normalize_tag_spacing};
pub use encode::{encode, encode_growing};
pub use vocab::TagVocabulary;

use crate::domain::StructuredValue;

/// Decodes raw generated text into a structured value, applying the full
/// cleanup pipeline first: eos/pad markers are removed everywhere, one
/// leading task-start tag is stripped by exact match, and tag-adjacent
/// separator spaces are normalized away.
pub fn decode_prediction(
    raw: &str,
    eos_token: &str,
    pad_token: &str,
    task_start_token: Option<&str>,
) -> StructuredValue {
    let cleaned = strip_generation_markers(raw, eos_token, pad_token, task_start_token);
    decode(&cleaned)
}
