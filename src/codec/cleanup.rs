//! Cleanup of raw generated sequences before decoding.

/// Strips generation markers from raw model output.
///
/// All occurrences of the eos and pad tokens are removed, then exactly one
/// leading task-start tag is stripped by exact string match. Matching the
/// task token exactly (rather than stripping the first tag-shaped substring)
/// keeps structural tags intact when the model skips the task prompt and
/// opens a field directly.
pub fn strip_generation_markers(
    raw: &str,
    eos_token: &str,
    pad_token: &str,
    task_start_token: Option<&str>,
) -> String {
    let mut text = raw.to_string();
    if !eos_token.is_empty() {
        text = text.replace(eos_token, "");
    }
    if !pad_token.is_empty() {
        text = text.replace(pad_token, "");
    }

    let mut cleaned = text.trim_start();
    if let Some(task) = task_start_token
        && !task.is_empty()
        && let Some(rest) = cleaned.strip_prefix(task)
    {
        cleaned = rest;
    }
    cleaned.trim().to_string()
}
