//! Chat module - the proposer/reviewer loop
//!
//! Contains the transcript, the turn-order state machine, the participant
//! and observer collaborators, and the controller that ties them together.

pub mod controller;
pub mod loop_state;
pub mod observer;
pub mod participant;
pub mod transcript;

pub use controller::{ChatOutcome, ChatReport, GroupChat};
pub use loop_state::{ChatLoopState, ChatState};
pub use observer::{CaptureObserver, ChatEvent, ConsoleObserver, Observer, SilentObserver};
pub use participant::{
    ConciergeAgent, FrontDeskAgent, RandomReviewer, Responder, ScriptedResponder,
    StubbornReviewer,
};
pub use transcript::Transcript;
