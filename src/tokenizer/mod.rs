//! Tokenizer collaborator seam.
//!
//! The codec works at the string level; mapping tokens to ids, truncation,
//! and padding belong to an external tokenizer. This module defines the
//! narrow trait the dataset-preparation pass needs from that collaborator,
//! plus an implementation over the HuggingFace `tokenizers` crate.

use std::path::Path;

use tokenizers::{AddedToken, Tokenizer};

use crate::core::{KieError, KieResult};

/// The slice of tokenizer behavior the sequence pipeline depends on:
/// registering newly observed tag tokens and naming the end-of-sequence and
/// padding markers.
pub trait SequenceTokenizer {
    /// Registers tokens as special tokens, returning how many were actually
    /// new. A nonzero return is the signal that the consumer must resize
    /// the model's embedding table.
    fn add_tokens(&mut self, tokens: &[String]) -> usize;

    /// The end-of-sequence marker appended to every target sequence.
    fn eos_token(&self) -> &str;

    /// The padding marker stripped from generated output.
    fn pad_token(&self) -> &str;
}

/// [`SequenceTokenizer`] over a HuggingFace `tokenizers` tokenizer.
///
/// The eos/pad token strings live in the surrounding model config rather
/// than in `tokenizer.json`, so they are supplied at construction;
/// [`donut_defaults`](Self::donut_defaults) covers the common
/// `</s>`/`<pad>` convention of Donut-style decoders.
pub struct HfSequenceTokenizer {
    inner: Tokenizer,
    eos: String,
    pad: String,
}

impl HfSequenceTokenizer {
    /// Wraps an already-loaded tokenizer.
    pub fn new(inner: Tokenizer, eos: impl Into<String>, pad: impl Into<String>) -> Self {
        Self {
            inner,
            eos: eos.into(),
            pad: pad.into(),
        }
    }

    /// Wraps a tokenizer with the `</s>` / `<pad>` marker convention.
    pub fn donut_defaults(inner: Tokenizer) -> Self {
        Self::new(inner, "</s>", "<pad>")
    }

    /// Loads a `tokenizer.json` file.
    ///
    /// # Errors
    ///
    /// Returns `KieError::Tokenizer` if the file cannot be read or parsed.
    pub fn from_file(
        path: impl AsRef<Path>,
        eos: impl Into<String>,
        pad: impl Into<String>,
    ) -> KieResult<Self> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| {
            KieError::tokenizer(format!("load tokenizer from '{}'", path.display()), e)
        })?;
        Ok(Self::new(inner, eos, pad))
    }

    /// Maps a token string to its id, if known.
    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.inner.token_to_id(token)
    }

    /// Current vocabulary size, including added tokens. The consumer sizes
    /// the decoder's embedding table from this after the growth pass.
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }

    /// The wrapped tokenizer, for id-level work outside this crate's scope.
    pub fn inner(&self) -> &Tokenizer {
        &self.inner
    }
}

impl SequenceTokenizer for HfSequenceTokenizer {
    fn add_tokens(&mut self, tokens: &[String]) -> usize {
        let added: Vec<AddedToken> = tokens
            .iter()
            .map(|t| AddedToken::from(t.clone(), true))
            .collect();
        self.inner.add_special_tokens(&added)
    }

    fn eos_token(&self) -> &str {
        &self.eos
    }

    fn pad_token(&self) -> &str {
        &self.pad
    }
}
