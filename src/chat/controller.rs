//! Group chat controller
//!
//! Drives the proposer/reviewer loop. After the user's seed the proposer
//! always speaks, then the reviewer, then the proposer again. The chat stops
//! when the reviewer answers with the approval token or the turn budget runs
//! out.

use serde::Serialize;
use tracing::{debug, info};

use crate::chat::loop_state::{ChatLoopState, ChatState};
use crate::chat::observer::Observer;
use crate::chat::participant::{reviewer_from_config, FrontDeskAgent, Responder};
use crate::chat::transcript::Transcript;
use crate::core::config::ChatConfig;
use crate::core::{ModelResult, Participant, Result, Role, TandemError, Utterance};
use crate::parse::is_approval;

/// How a chat ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatOutcome {
    /// The reviewer approved
    Terminated,
    /// The turn budget ran out first
    Exhausted,
}

impl ChatOutcome {
    pub fn is_complete(self) -> bool {
        self == ChatOutcome::Terminated
    }

    /// Process exit status for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            ChatOutcome::Terminated => 0,
            ChatOutcome::Exhausted => 1,
        }
    }
}

/// Result of a finished chat
#[derive(Debug, Clone, Serialize)]
pub struct ChatReport {
    pub outcome: ChatOutcome,
    /// Agent turns taken (the seed is not a turn)
    pub turns: usize,
    pub max_turns: usize,
    pub transcript: Transcript,
}

/// Two-agent chat with fixed alternation
pub struct GroupChat {
    proposer: Box<dyn Responder>,
    reviewer: Box<dyn Responder>,
    max_turns: usize,
}

impl GroupChat {
    /// Create a chat from explicit responders.
    ///
    /// Fails if a responder speaks for the wrong participant.
    pub fn new(
        proposer: Box<dyn Responder>,
        reviewer: Box<dyn Responder>,
        max_turns: usize,
    ) -> Result<Self> {
        for (responder, role) in [(&proposer, Role::Proposer), (&reviewer, Role::Reviewer)] {
            let participant = responder.participant();
            if participant.role() != role {
                return Err(TandemError::invalid(format!(
                    "{} cannot act as the {:?}",
                    participant, role
                )));
            }
        }

        Ok(Self {
            proposer,
            reviewer,
            max_turns,
        })
    }

    /// Create a chat with the mock proposer and the configured reviewer
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            proposer: Box::new(FrontDeskAgent),
            reviewer: reviewer_from_config(config),
            max_turns: config.max_turns,
        }
    }

    fn responder_mut(&mut self, participant: Participant) -> &mut dyn Responder {
        match participant.role() {
            Role::Proposer => self.proposer.as_mut(),
            Role::Reviewer => self.reviewer.as_mut(),
        }
    }

    /// Run a chat to completion from the user's seed message
    pub fn run(&mut self, seed: &str, observer: &mut dyn Observer) -> ChatReport {
        let mut transcript = Transcript::seeded(seed);
        if let Some(utterance) = transcript.seed() {
            observer.on_utterance(utterance);
        }

        let mut state = ChatLoopState::new(self.max_turns);
        info!(max_turns = self.max_turns, "Starting group chat");

        while let Some(speaker) = state.next_speaker() {
            let content = self.responder_mut(speaker).reply(&transcript);

            // Only the reviewer can end the chat
            let approved = speaker.role() == Role::Reviewer
                && is_approval(Some(&ModelResult::text(content.as_str())));

            transcript.push(Utterance::new(speaker, content));
            if let Some(utterance) = transcript.last() {
                observer.on_utterance(utterance);
            }

            let next = state.record_turn(speaker, approved);
            debug!(
                turn = state.turn,
                speaker = %speaker,
                approved,
                state = %next,
                "Turn complete"
            );
        }

        let outcome = match state.state() {
            ChatState::Terminated => ChatOutcome::Terminated,
            _ => ChatOutcome::Exhausted,
        };
        observer.on_outcome(&outcome);

        info!(
            outcome = ?outcome,
            turns = state.turn,
            utterances = transcript.len(),
            "Group chat finished"
        );

        ChatReport {
            outcome,
            turns: state.turn,
            max_turns: self.max_turns,
            transcript,
        }
    }
}
