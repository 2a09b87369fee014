//! Ground-truth target-sequence preparation for a labeled split.
//!
//! One labeled record pairs a document image with its annotated entities as
//! a JSON string. Before training, every record's annotation is encoded
//! into a tagged target sequence; on the training split this pass also
//! grows the tag vocabulary, and only once the whole split has been seen
//! can the newly observed tokens be registered with the tokenizer (the
//! embedding table size depends on the final vocabulary).
//!
//! Tensor construction, padding, and label masking stay with the training
//! framework; this module stops at the string level.

use image::RgbImage;
use rayon::prelude::*;

use crate::codec::{TagVocabulary, encode, encode_growing};
use crate::core::KieResult;
use crate::domain::StructuredValue;
use crate::tokenizer::SequenceTokenizer;

/// One labeled document: the raster image and its ground-truth entities as
/// a JSON string.
#[derive(Debug, Clone)]
pub struct TrainingRecord {
    /// The document image.
    pub image: RgbImage,
    /// Ground-truth extracted entities, JSON-encoded.
    pub entities: String,
}

impl TrainingRecord {
    /// Creates a record from an image and its JSON annotation.
    pub fn new(image: RgbImage, entities: impl Into<String>) -> Self {
        Self {
            image,
            entities: entities.into(),
        }
    }
}

/// Which split a preparation pass serves. Only the training split grows
/// the tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Training split: encode with vocabulary growth, sequentially.
    Train,
    /// Validation split: read-only encode, parallelized per record.
    Validation,
}

/// Configuration for target-sequence preparation.
#[derive(Debug, Clone)]
pub struct SequenceDatasetConfig {
    /// Which split is being prepared.
    pub split: Split,
    /// Task-start token prefixed to decoder input at generation time;
    /// registered as a special token alongside the grown tags.
    pub task_start_token: String,
    /// Prompt-end token; defaults to the task-start token when unset.
    pub prompt_end_token: Option<String>,
}

impl Default for SequenceDatasetConfig {
    fn default() -> Self {
        Self {
            split: Split::Train,
            task_start_token: "<s>".to_string(),
            prompt_end_token: None,
        }
    }
}

impl SequenceDatasetConfig {
    /// Creates a config for the given split with default tokens.
    pub fn for_split(split: Split) -> Self {
        Self {
            split,
            ..Self::default()
        }
    }

    /// Sets a task-specific start token (e.g. `<s_receipt>`).
    pub fn with_task_start_token(mut self, token: impl Into<String>) -> Self {
        self.task_start_token = token.into();
        self
    }

    /// The effective prompt-end token.
    pub fn prompt_end_token(&self) -> &str {
        self.prompt_end_token
            .as_deref()
            .unwrap_or(&self.task_start_token)
    }
}

/// The output of a preparation pass.
#[derive(Debug, Clone)]
pub struct GroundTruthSequences {
    /// One eos-terminated target sequence per input record, in order.
    pub sequences: Vec<String>,
    /// How many tokens the tokenizer reported as genuinely new. Nonzero
    /// means the consumer must resize the decoder's embedding table.
    pub newly_added_tokens: usize,
}

/// Encodes every record's annotation into an eos-terminated target
/// sequence and registers newly observed special tokens with the
/// tokenizer.
///
/// The training split encodes sequentially while holding the single `&mut`
/// on the vocabulary; the validation split encodes read-only and in
/// parallel.
///
/// # Errors
///
/// Returns `KieError::InvalidInput` naming the record index if any
/// `entities` field is not a well-formed structured value.
pub fn prepare_target_sequences<T: SequenceTokenizer>(
    records: &[TrainingRecord],
    config: &SequenceDatasetConfig,
    vocab: &mut TagVocabulary,
    tokenizer: &mut T,
) -> KieResult<GroundTruthSequences> {
    let mut values = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let value = StructuredValue::from_json_str(&record.entities)
            .map_err(|e| e.with_input_context(format!("record {}", index)))?;
        values.push(value);
    }

    let eos = tokenizer.eos_token().to_string();
    let sequences: Vec<String> = match config.split {
        Split::Train => values
            .iter()
            .map(|value| {
                let mut seq = encode_growing(value, vocab);
                seq.push_str(&eos);
                seq
            })
            .collect(),
        Split::Validation => values
            .par_iter()
            .map(|value| {
                let mut seq = encode(value);
                seq.push_str(&eos);
                seq
            })
            .collect(),
    };

    let mut special_tokens = vocab.take_newly_added();
    special_tokens.push(config.task_start_token.clone());
    if config.prompt_end_token() != config.task_start_token {
        special_tokens.push(config.prompt_end_token().to_string());
    }
    let newly_added_tokens = tokenizer.add_tokens(&special_tokens);
    tracing::debug!(
        records = records.len(),
        vocab_len = vocab.len(),
        newly_added_tokens,
        "prepared target sequences"
    );

    Ok(GroundTruthSequences {
        sequences,
        newly_added_tokens,
    })
}
