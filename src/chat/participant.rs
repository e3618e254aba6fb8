//! Participant responders
//!
//! A responder produces the next utterance for one participant given the
//! full transcript. The mock agents here stand in for model-backed ones.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chat::transcript::Transcript;
use crate::core::config::{ChatConfig, ReviewerKind};
use crate::core::Participant;

/// Proposal before any critique
pub const INITIAL_SUGGESTION: &str =
    "I recommend visiting the Louvre and then having coffee at a nearby cafe.";
/// Proposal after the reviewer asked for a refinement
pub const REFINED_SUGGESTION: &str =
    "Here's a refined, more local suggestion: visit the lesser-known canal district for street music.";
/// Reviewer critique asking for another pass
pub const REFINEMENT_REQUEST: &str = "Please refine to be less touristy and more authentic.";
/// Reviewer reply when the proposer has not spoken yet
pub const NO_RECOMMENDATION: &str = "No recommendation found.";

/// Cues in a proposal that the heuristic reviewer accepts
const APPROVAL_CUES: [&str; 3] = ["lesser-known", "refined", "authentic"];

/// Produces replies on behalf of one participant
pub trait Responder {
    /// Which participant this responder speaks for
    fn participant(&self) -> Participant;

    /// Content of the next utterance, given everything said so far
    fn reply(&mut self, transcript: &Transcript) -> String;
}

/// Mock proposer: recommends a tourist classic, refines when asked
#[derive(Debug, Clone, Default)]
pub struct FrontDeskAgent;

impl Responder for FrontDeskAgent {
    fn participant(&self) -> Participant {
        Participant::FrontDesk
    }

    fn reply(&mut self, transcript: &Transcript) -> String {
        let asked_to_refine = transcript.len() >= 2
            && transcript
                .last()
                .is_some_and(|u| u.content().to_lowercase().contains("refine"));

        if asked_to_refine {
            REFINED_SUGGESTION.to_string()
        } else {
            INITIAL_SUGGESTION.to_string()
        }
    }
}

/// Mock reviewer: approves once the latest proposal looks refined
#[derive(Debug, Clone, Default)]
pub struct ConciergeAgent;

impl Responder for ConciergeAgent {
    fn participant(&self) -> Participant {
        Participant::Concierge
    }

    fn reply(&mut self, transcript: &Transcript) -> String {
        let Some(proposal) = transcript.last_by(Participant::FrontDesk) else {
            return NO_RECOMMENDATION.to_string();
        };

        let proposal = proposal.content().to_lowercase();
        if APPROVAL_CUES.iter().any(|cue| proposal.contains(cue)) {
            "yes".to_string()
        } else {
            REFINEMENT_REQUEST.to_string()
        }
    }
}

/// Reviewer that approves each turn with a fixed probability
#[derive(Debug, Clone)]
pub struct RandomReviewer {
    approval_rate: f64,
    rng: StdRng,
}

impl RandomReviewer {
    /// `approval_rate` is clamped to `[0, 1]` and NaN means never approve.
    /// A seed makes runs repeatable.
    pub fn new(approval_rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            approval_rate: if approval_rate.is_nan() {
                0.0
            } else {
                approval_rate.clamp(0.0, 1.0)
            },
            rng,
        }
    }
}

impl Responder for RandomReviewer {
    fn participant(&self) -> Participant {
        Participant::Concierge
    }

    fn reply(&mut self, _transcript: &Transcript) -> String {
        if self.rng.random_bool(self.approval_rate) {
            "yes".to_string()
        } else {
            REFINEMENT_REQUEST.to_string()
        }
    }
}

/// Reviewer that never approves
#[derive(Debug, Clone, Default)]
pub struct StubbornReviewer;

impl Responder for StubbornReviewer {
    fn participant(&self) -> Participant {
        Participant::Concierge
    }

    fn reply(&mut self, _transcript: &Transcript) -> String {
        REFINEMENT_REQUEST.to_string()
    }
}

/// Replays a fixed list of replies, repeating the last one once drained
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    participant: Participant,
    replies: Vec<String>,
    next: usize,
}

impl ScriptedResponder {
    pub fn new<I, S>(participant: Participant, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            participant,
            replies: replies.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// How many replies have been produced
    pub fn calls(&self) -> usize {
        self.next
    }
}

impl Responder for ScriptedResponder {
    fn participant(&self) -> Participant {
        self.participant
    }

    fn reply(&mut self, _transcript: &Transcript) -> String {
        let index = self.next.min(self.replies.len().saturating_sub(1));
        self.next += 1;
        self.replies.get(index).cloned().unwrap_or_default()
    }
}

/// Build the reviewer selected in the chat configuration
pub fn reviewer_from_config(config: &ChatConfig) -> Box<dyn Responder> {
    match config.reviewer {
        ReviewerKind::Heuristic => Box::new(ConciergeAgent),
        ReviewerKind::Random => {
            Box::new(RandomReviewer::new(config.approval_rate, config.rng_seed))
        }
        ReviewerKind::Stubborn => Box::new(StubbornReviewer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Utterance;

    fn transcript(replies: &[(Participant, &str)]) -> Transcript {
        let mut transcript = Transcript::seeded("I would like to go to Paris.");
        for (who, content) in replies {
            transcript.push(Utterance::new(*who, *content));
        }
        transcript
    }

    #[test]
    fn test_front_desk_initial_suggestion() {
        let mut agent = FrontDeskAgent;
        assert_eq!(agent.reply(&transcript(&[])), INITIAL_SUGGESTION);
    }

    #[test]
    fn test_front_desk_refines_on_request() {
        let mut agent = FrontDeskAgent;
        let history = transcript(&[
            (Participant::FrontDesk, INITIAL_SUGGESTION),
            (Participant::Concierge, "Please REFINE this."),
        ]);
        assert_eq!(agent.reply(&history), REFINED_SUGGESTION);
    }

    #[test]
    fn test_front_desk_ignores_refine_in_seed() {
        let mut agent = FrontDeskAgent;
        let history = Transcript::seeded("Please refine my trip");
        assert_eq!(agent.reply(&history), INITIAL_SUGGESTION);
    }

    #[test]
    fn test_concierge_without_proposal() {
        let mut agent = ConciergeAgent;
        assert_eq!(agent.reply(&transcript(&[])), NO_RECOMMENDATION);
    }

    #[test]
    fn test_concierge_critiques_then_approves() {
        let mut agent = ConciergeAgent;
        let history = transcript(&[(Participant::FrontDesk, INITIAL_SUGGESTION)]);
        assert_eq!(agent.reply(&history), REFINEMENT_REQUEST);

        let history = transcript(&[
            (Participant::FrontDesk, INITIAL_SUGGESTION),
            (Participant::Concierge, REFINEMENT_REQUEST),
            (Participant::FrontDesk, REFINED_SUGGESTION),
        ]);
        assert_eq!(agent.reply(&history), "yes");
    }

    #[test]
    fn test_concierge_accepts_authentic() {
        let mut agent = ConciergeAgent;
        let history = transcript(&[(
            Participant::FrontDesk,
            "An AUTHENTIC bistro in Belleville.",
        )]);
        assert_eq!(agent.reply(&history), "yes");
    }

    #[test]
    fn test_random_reviewer_extremes() {
        let history = transcript(&[(Participant::FrontDesk, INITIAL_SUGGESTION)]);

        let mut always = RandomReviewer::new(1.0, Some(7));
        let mut never = RandomReviewer::new(0.0, Some(7));
        for _ in 0..20 {
            assert_eq!(always.reply(&history), "yes");
            assert_eq!(never.reply(&history), REFINEMENT_REQUEST);
        }
    }

    #[test]
    fn test_random_reviewer_out_of_range_rates() {
        let history = transcript(&[(Participant::FrontDesk, INITIAL_SUGGESTION)]);

        let mut nan = RandomReviewer::new(f64::NAN, Some(1));
        let mut high = RandomReviewer::new(f64::INFINITY, Some(1));
        let mut low = RandomReviewer::new(-2.0, Some(1));
        for _ in 0..10 {
            assert_eq!(nan.reply(&history), REFINEMENT_REQUEST);
            assert_eq!(high.reply(&history), "yes");
            assert_eq!(low.reply(&history), REFINEMENT_REQUEST);
        }
    }

    #[test]
    fn test_random_reviewer_is_repeatable() {
        let history = transcript(&[]);
        let mut a = RandomReviewer::new(0.5, Some(42));
        let mut b = RandomReviewer::new(0.5, Some(42));
        let a: Vec<String> = (0..16).map(|_| a.reply(&history)).collect();
        let b: Vec<String> = (0..16).map(|_| b.reply(&history)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_responder_repeats_last() {
        let history = transcript(&[]);
        let mut scripted = ScriptedResponder::new(Participant::Concierge, ["no", "maybe"]);
        assert_eq!(scripted.reply(&history), "no");
        assert_eq!(scripted.reply(&history), "maybe");
        assert_eq!(scripted.reply(&history), "maybe");
        assert_eq!(scripted.calls(), 3);

        let mut empty = ScriptedResponder::new(Participant::FrontDesk, Vec::<String>::new());
        assert_eq!(empty.reply(&history), "");
    }

    #[test]
    fn test_reviewer_from_config() {
        let mut config = ChatConfig::default();
        for kind in [ReviewerKind::Heuristic, ReviewerKind::Random, ReviewerKind::Stubborn] {
            config.reviewer = kind;
            assert_eq!(reviewer_from_config(&config).participant(), Participant::Concierge);
        }
    }
}
