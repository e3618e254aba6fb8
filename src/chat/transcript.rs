//! Chat transcript
//!
//! Append-only record of every utterance in a run, seeded by the user.

use serde::Serialize;

use crate::core::{Author, Utterance};

/// Ordered, append-only chat history
///
/// Only the chat controller appends; everything else reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    /// Start a transcript with the user's seed message
    pub fn seeded(content: impl Into<String>) -> Self {
        Self {
            utterances: vec![Utterance::user(content)],
        }
    }

    /// Append an utterance
    pub(crate) fn push(&mut self, utterance: Utterance) {
        self.utterances.push(utterance);
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn iter(&self) -> impl Iterator<Item = &Utterance> {
        self.utterances.iter()
    }

    /// The user's opening message
    pub fn seed(&self) -> Option<&Utterance> {
        self.utterances.first()
    }

    pub fn last(&self) -> Option<&Utterance> {
        self.utterances.last()
    }

    /// Most recent utterance by the given author
    pub fn last_by(&self, author: impl Into<Author>) -> Option<&Utterance> {
        let author = author.into();
        self.utterances.iter().rev().find(|u| u.author() == author)
    }

    /// Number of utterances by the given author
    pub fn count_by(&self, author: impl Into<Author>) -> usize {
        let author = author.into();
        self.utterances.iter().filter(|u| u.author() == author).count()
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Utterance;
    type IntoIter = std::slice::Iter<'a, Utterance>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.iter()
    }
}
