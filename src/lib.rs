//! # Doc KIE
//!
//! Structured-sequence codec and evaluation metrics for document key
//! information extraction with sequence-generation models.
//!
//! Sequence-generation document models (Donut-style vision encoders with a
//! text decoder) are trained to emit a flat tagged token sequence instead of
//! JSON. This crate owns the structured side of that pipeline:
//!
//! - Encoding nested key-value ground truth into tagged target sequences,
//!   growing a tag vocabulary as new field names are observed
//! - Decoding free-form model output back into a structured value, tolerant
//!   of truncated or malformed tags
//! - Scoring predictions against ground truth, both with a full structural
//!   accuracy metric and with a cheap normalized-edit-distance proxy
//! - Preparing ground-truth target sequences for a labeled image split
//!
//! Model inference, the training loop, checkpointing, and token-id mapping
//! are out of scope; the tokenizer collaborator seam in [`tokenizer`] is the
//! only contact point with those concerns.
//!
//! ## Modules
//!
//! * [`core`] - Error handling
//! * [`domain`] - The structured value domain type and JSON interop
//! * [`codec`] - Tag vocabulary, encode/decode, model-output cleanup
//! * [`eval`] - Structural accuracy, edit-distance proxy, reporting
//! * [`dataset`] - Target-sequence preparation for labeled records
//! * [`tokenizer`] - Tokenizer collaborator seam
//!
//! ## Quick Start
//!
//! ```rust
//! use doc_kie::prelude::*;
//!
//! # fn main() -> Result<(), doc_kie::core::KieError> {
//! let mut vocab = TagVocabulary::new();
//! let gt = StructuredValue::from_json_str(r#"{"company":"ACME","total":"12.50"}"#)?;
//!
//! let target = encode_growing(&gt, &mut vocab);
//! assert_eq!(target, "<s_company>ACME</s_company><s_total>12.50</s_total>");
//!
//! let predicted = decode("<s_company>ACME</s_company><s_total>12.00</s_total>");
//! let accuracy = structural_accuracy(&predicted, &gt);
//! assert!(accuracy < 1.0);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod core;
pub mod dataset;
pub mod domain;
pub mod eval;
pub mod tokenizer;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::core::{KieError, KieResult};

    // Domain types
    pub use crate::domain::StructuredValue;

    // Codec
    pub use crate::codec::{
        TagVocabulary, decode, decode_prediction, encode, encode_growing,
        strip_generation_markers,
    };

    // Evaluation
    pub use crate::eval::{
        EvaluationReport, approximate_edit_score, edit_distance, mean_edit_distance,
        normalized_edit_distance, structural_accuracy, structural_accuracy_json,
    };

    // Dataset preparation
    pub use crate::dataset::{
        GroundTruthSequences, SequenceDatasetConfig, Split, TrainingRecord,
        prepare_target_sequences,
    };

    // Tokenizer seam
    pub use crate::tokenizer::{HfSequenceTokenizer, SequenceTokenizer};
}
