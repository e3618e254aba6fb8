//! Chat loop state management
//!
//! Tracks whose turn it is, how many agent turns have elapsed and whether
//! the chat has reached a terminal state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Participant, Role};

/// States of the turn-order machine.
///
/// Every run starts at `WaitingForProposer` and ends at either `Terminated`
/// or `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    /// The proposer speaks next.
    WaitingForProposer,
    /// The reviewer speaks next.
    WaitingForReviewer,
    /// The reviewer approved. Terminal.
    Terminated,
    /// The turn budget ran out without approval. Terminal.
    Exhausted,
}

impl ChatState {
    /// Whether this is a terminal state (no further transitions allowed).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated | Self::Exhausted)
    }

    fn waiting_for(participant: Participant) -> Self {
        match participant.role() {
            Role::Proposer => Self::WaitingForProposer,
            Role::Reviewer => Self::WaitingForReviewer,
        }
    }
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitingForProposer => write!(f, "WaitingForProposer"),
            Self::WaitingForReviewer => write!(f, "WaitingForReviewer"),
            Self::Terminated => write!(f, "Terminated"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// State of the chat loop
#[derive(Debug, Clone)]
pub struct ChatLoopState {
    /// Agent turns taken so far
    pub turn: usize,
    /// Maximum allowed turns
    pub max_turns: usize,
    state: ChatState,
}

impl ChatLoopState {
    /// Create a loop state for a freshly seeded chat.
    ///
    /// A zero budget is exhausted before anyone speaks.
    pub fn new(max_turns: usize) -> Self {
        let state = if max_turns == 0 {
            ChatState::Exhausted
        } else {
            ChatState::waiting_for(Participant::default_speaker())
        };

        Self {
            turn: 0,
            max_turns,
            state,
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    /// Check if the loop should continue
    pub fn should_continue(&self) -> bool {
        !self.state.is_terminal()
    }

    /// The participant due to speak, or `None` once terminal
    pub fn next_speaker(&self) -> Option<Participant> {
        match self.state {
            ChatState::WaitingForProposer => Some(Participant::FrontDesk),
            ChatState::WaitingForReviewer => Some(Participant::Concierge),
            ChatState::Terminated | ChatState::Exhausted => None,
        }
    }

    /// Record a completed turn and advance the machine.
    ///
    /// `approved` is only honored for the reviewer. Approval wins over
    /// exhaustion when both happen on the same turn.
    pub fn record_turn(&mut self, speaker: Participant, approved: bool) -> ChatState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.turn += 1;

        self.state = if approved && speaker.role() == Role::Reviewer {
            ChatState::Terminated
        } else if self.turn >= self.max_turns {
            ChatState::Exhausted
        } else {
            ChatState::waiting_for(speaker.other())
        };

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_state_new() {
        let state = ChatLoopState::new(10);
        assert_eq!(state.turn, 0);
        assert_eq!(state.max_turns, 10);
        assert_eq!(state.state(), ChatState::WaitingForProposer);
        assert_eq!(state.next_speaker(), Some(Participant::FrontDesk));
    }

    #[test]
    fn test_zero_budget_is_exhausted() {
        let state = ChatLoopState::new(0);
        assert!(!state.should_continue());
        assert_eq!(state.state(), ChatState::Exhausted);
        assert_eq!(state.next_speaker(), None);
    }

    #[test]
    fn test_alternation() {
        let mut state = ChatLoopState::new(10);
        assert_eq!(
            state.record_turn(Participant::FrontDesk, false),
            ChatState::WaitingForReviewer
        );
        assert_eq!(
            state.record_turn(Participant::Concierge, false),
            ChatState::WaitingForProposer
        );
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn test_proposer_cannot_terminate() {
        let mut state = ChatLoopState::new(10);
        assert_eq!(
            state.record_turn(Participant::FrontDesk, true),
            ChatState::WaitingForReviewer
        );
    }

    #[test]
    fn test_reviewer_approval_terminates() {
        let mut state = ChatLoopState::new(10);
        state.record_turn(Participant::FrontDesk, false);
        assert_eq!(
            state.record_turn(Participant::Concierge, true),
            ChatState::Terminated
        );
        assert!(!state.should_continue());
        // Terminal states absorb further turns
        assert_eq!(
            state.record_turn(Participant::FrontDesk, false),
            ChatState::Terminated
        );
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn test_exhaustion_after_exact_budget() {
        let mut state = ChatLoopState::new(3);
        state.record_turn(Participant::FrontDesk, false);
        state.record_turn(Participant::Concierge, false);
        assert!(state.should_continue());
        assert_eq!(
            state.record_turn(Participant::FrontDesk, false),
            ChatState::Exhausted
        );
        assert_eq!(state.turn, 3);
    }

    #[test]
    fn test_approval_on_last_turn_wins() {
        let mut state = ChatLoopState::new(2);
        state.record_turn(Participant::FrontDesk, false);
        assert_eq!(
            state.record_turn(Participant::Concierge, true),
            ChatState::Terminated
        );
    }
}
