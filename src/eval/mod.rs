//! Evaluation metrics for predicted document structures.
//!
//! Two tiers, mirroring how sequence-generation fine-tuning is monitored:
//! a cheap normalized-edit-distance proxy over raw sequences for validation
//! steps, and the full structural accuracy over decoded values for final
//! evaluation.

mod edit;
mod report;
mod structural;

pub use edit::{approximate_edit_score, edit_distance, normalized_edit_distance};
pub use report::{EvaluationReport, mean_edit_distance};
pub use structural::{structural_accuracy, structural_accuracy_json};
