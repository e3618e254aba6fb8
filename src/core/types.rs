//! Shared types used across Tandem modules
//!
//! Contains the participant identifiers, utterances and the model result
//! shape consumed by the classifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversational role of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Produces recommendations
    Proposer,
    /// Approves or critiques; its approval ends the chat
    Reviewer,
}

/// One of the two agents taking part in the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// The proposer. Speaks first and is the default selection.
    FrontDesk,
    /// The reviewer.
    Concierge,
}

impl Participant {
    /// Both participants, in speaking order
    pub const ALL: [Participant; 2] = [Participant::FrontDesk, Participant::Concierge];

    /// The participant that opens every cycle
    pub fn default_speaker() -> Self {
        Participant::FrontDesk
    }

    /// Display name, as it appears in transcripts
    pub fn name(self) -> &'static str {
        match self {
            Participant::FrontDesk => "FrontDesk",
            Participant::Concierge => "Concierge",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Participant::FrontDesk => Role::Proposer,
            Participant::Concierge => Role::Reviewer,
        }
    }

    /// The participant that speaks after this one
    pub fn other(self) -> Self {
        match self {
            Participant::FrontDesk => Participant::Concierge,
            Participant::Concierge => Participant::FrontDesk,
        }
    }

    /// Look up a participant by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name().to_lowercase() == name)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Author of an utterance: the synthetic user who seeds the chat, or an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    User,
    Agent(Participant),
}

impl Author {
    pub fn name(self) -> &'static str {
        match self {
            Author::User => "User",
            Author::Agent(p) => p.name(),
        }
    }

    /// The agent behind this author, if any
    pub fn participant(self) -> Option<Participant> {
        match self {
            Author::User => None,
            Author::Agent(p) => Some(p),
        }
    }
}

impl From<Participant> for Author {
    fn from(participant: Participant) -> Self {
        Author::Agent(participant)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Author {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Author {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        if name.trim().eq_ignore_ascii_case("user") {
            return Ok(Author::User);
        }
        Participant::from_name(&name)
            .map(Author::Agent)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown author '{}'", name)))
    }
}

/// A single message in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    author: Author,
    content: String,
}

impl Utterance {
    pub fn new(author: impl Into<Author>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }

    /// The seed message from the synthetic user
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Output of a (possibly absent) model call: zero or more text candidates.
///
/// Only the first candidate carries meaning. A candidate may itself be
/// missing, which the classifiers treat like no output at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResult {
    #[serde(default)]
    pub value: Vec<Option<String>>,
}

impl ModelResult {
    pub fn new(value: Vec<Option<String>>) -> Self {
        Self { value }
    }

    /// A result with a single text candidate
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            value: vec![Some(content.into())],
        }
    }

    /// A result with no candidates
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_lookup() {
        assert_eq!(
            Participant::from_name(" concierge "),
            Some(Participant::Concierge)
        );
        assert_eq!(
            Participant::from_name("FRONTDESK"),
            Some(Participant::FrontDesk)
        );
        assert_eq!(Participant::from_name("front desk"), None);
        assert_eq!(Participant::from_name(""), None);
    }

    #[test]
    fn test_participant_roles() {
        assert_eq!(Participant::default_speaker().role(), Role::Proposer);
        assert_eq!(Participant::Concierge.role(), Role::Reviewer);
        assert_eq!(Participant::FrontDesk.other(), Participant::Concierge);
        assert_eq!(Participant::Concierge.other(), Participant::FrontDesk);
    }

    #[test]
    fn test_author_serde() {
        let utterance = Utterance::new(Participant::Concierge, "yes");
        let json = serde_json::to_string(&utterance).unwrap();
        assert_eq!(json, r#"{"author":"Concierge","content":"yes"}"#);

        let back: Utterance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, utterance);

        let user: Author = serde_json::from_str(r#""User""#).unwrap();
        assert_eq!(user, Author::User);
        assert!(serde_json::from_str::<Author>(r#""Bellhop""#).is_err());
    }

    #[test]
    fn test_model_result_deserialize() {
        let result: ModelResult = serde_json::from_str(r#"{"value": ["yes", null]}"#).unwrap();
        assert_eq!(result.value, vec![Some("yes".to_string()), None]);

        let result: ModelResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, ModelResult::empty());
    }
}
