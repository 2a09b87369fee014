//! The growing tag vocabulary.

use std::collections::HashSet;

/// Builds the open tag for a field name, e.g. `<s_total>` for `total`.
pub fn open_tag(key: &str) -> String {
    format!("<s_{}>", key)
}

/// Builds the close tag for a field name, e.g. `</s_total>` for `total`.
pub fn close_tag(key: &str) -> String {
    format!("</s_{}>", key)
}

/// The set of structural tag tokens observed so far, one open/close pair
/// per distinct field name.
///
/// The vocabulary starts empty and only grows; the consumer sizes the
/// model's embedding table from it, so insertion order is preserved and
/// every growth is tracked so newly added tokens can be forwarded to the
/// tokenizer collaborator. The `&mut` receiver on [`add_key`](Self::add_key)
/// enforces the single-writer discipline during the training-split growth
/// pass; read-only snapshots from [`tokens`](Self::tokens) can be shared
/// freely afterwards.
#[derive(Debug, Default, Clone)]
pub struct TagVocabulary {
    tokens: Vec<String>,
    seen: HashSet<String>,
    newly_added: Vec<String>,
}

impl TagVocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tag pair for a field name if not already present.
    ///
    /// Returns true when the pair was new.
    pub fn add_key(&mut self, key: &str) -> bool {
        let open = open_tag(key);
        if self.seen.contains(&open) {
            return false;
        }
        let close = close_tag(key);
        tracing::debug!(key, "adding tag pair to vocabulary");
        for token in [open, close] {
            self.seen.insert(token.clone());
            self.newly_added.push(token.clone());
            self.tokens.push(token);
        }
        true
    }

    /// Whether the given token string is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    /// Number of tag tokens (two per observed field name).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary is still empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tag tokens in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Drains the tokens added since the last call, in insertion order.
    ///
    /// Called after a growth pass to collect the tokens that still need to
    /// be registered with the tokenizer collaborator.
    pub fn take_newly_added(&mut self) -> Vec<String> {
        std::mem::take(&mut self.newly_added)
    }
}
