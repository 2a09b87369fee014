//! Tree-aligned structural accuracy.
//!
//! Both values are flattened into multisets of (key-path, leaf) pairs and
//! scored Dice-style: twice the matched pairs over the total leaves across
//! both structures. A correct key with a correct value earns full credit,
//! a correct key with a wrong value or a missing/extra key earns none, and
//! every leaf weighs the same, so larger substructures contribute in
//! proportion to their size.

use std::collections::HashMap;

use crate::core::KieResult;
use crate::domain::StructuredValue;

/// Structural + content agreement between a predicted and a ground-truth
/// value, in [0, 1]. Higher is better; identical values score 1.0, and two
/// empty objects count as identical.
///
/// Pure and total over [`StructuredValue`]; conformance errors can only
/// arise at JSON conversion, for which see [`structural_accuracy_json`].
pub fn structural_accuracy(predicted: &StructuredValue, ground_truth: &StructuredValue) -> f64 {
    let mut pred_leaves = Vec::new();
    flatten(predicted, &mut Vec::new(), &mut pred_leaves);
    let mut gt_leaves = Vec::new();
    flatten(ground_truth, &mut Vec::new(), &mut gt_leaves);

    let total = pred_leaves.len() + gt_leaves.len();
    if total == 0 {
        return 1.0;
    }

    let mut remaining: HashMap<(Vec<String>, String), usize> = HashMap::new();
    for leaf in gt_leaves {
        *remaining.entry(leaf).or_insert(0) += 1;
    }

    let mut matched = 0usize;
    for leaf in pred_leaves {
        if let Some(count) = remaining.get_mut(&leaf)
            && *count > 0
        {
            *count -= 1;
            matched += 1;
        }
    }

    (2 * matched) as f64 / total as f64
}

/// Parses both inputs as JSON and scores them.
///
/// # Errors
///
/// Returns `KieError::InvalidInput` if either input is not a well-formed
/// structured value (invalid JSON, or JSON containing arrays).
pub fn structural_accuracy_json(predicted: &str, ground_truth: &str) -> KieResult<f64> {
    let predicted = StructuredValue::from_json_str(predicted)
        .map_err(|e| e.with_input_context("predicted"))?;
    let ground_truth = StructuredValue::from_json_str(ground_truth)
        .map_err(|e| e.with_input_context("ground truth"))?;
    Ok(structural_accuracy(&predicted, &ground_truth))
}

/// Depth-first flattening into (key-path, normalized leaf text) pairs.
fn flatten(
    value: &StructuredValue,
    path: &mut Vec<String>,
    out: &mut Vec<(Vec<String>, String)>,
) {
    match value {
        StructuredValue::Object(fields) => {
            for (key, inner) in fields {
                path.push(key.clone());
                flatten(inner, path, out);
                path.pop();
            }
        }
        leaf => {
            if let Some(text) = leaf.leaf_text() {
                out.push((path.clone(), normalize_leaf(&text)));
            }
        }
    }
}

/// Leaf comparison is exact string equality after whitespace normalization:
/// trim, and collapse interior whitespace runs to a single space.
fn normalize_leaf(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
