//! The dialogue engine: intent classification, topic handlers, and the
//! per-turn orchestrator.
//!
//! Every turn is a pure, synchronous computation from
//! `(text, session state)` to a `BotResponse`; the engine holds only the
//! immutable content repository and never retains session references, so
//! independent sessions can be processed concurrently without locks.

pub mod events;
pub mod faq;
pub mod greeting;
pub mod intent;
pub mod job_detail;
pub mod jobs;
pub mod mentorship;
pub mod profile;
pub mod signup;

use tracing::debug;

use crate::models::response::{quick_replies, BotResponse};
use crate::models::session::{Context, SessionState};
use crate::repository::ContentRepository;
use intent::Intent;

/// Tunable matching parameters. The defaults reproduce stock behavior.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum keyword-overlap score for an FAQ entry to be served.
    pub faq_score_threshold: usize,
    /// Question words at or below this length are ignored when scoring.
    pub faq_min_word_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            faq_score_threshold: 2,
            faq_min_word_len: 3,
        }
    }
}

/// The dialogue orchestrator. Construct once with a content repository and
/// call [`Engine::handle_turn`] per user message; the caller owns the
/// session state and merges each response back via
/// [`SessionState::absorb`].
pub struct Engine {
    repo: ContentRepository,
    config: EngineConfig,
}

impl Engine {
    pub fn new(repo: ContentRepository) -> Self {
        Engine {
            repo,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(repo: ContentRepository, config: EngineConfig) -> Self {
        Engine { repo, config }
    }

    pub fn repository(&self) -> &ContentRepository {
        &self.repo
    }

    /// Produces the bot's response for one user message.
    ///
    /// Resolution order:
    /// 1. "tell me about" containment routes to the job-detail handler,
    ///    bypassing classification entirely, whatever the context (even an
    ///    active signup flow is abandoned).
    /// 2. An active signup slot (name/email/interest) routes the raw input
    ///    to the signup handler; mid-flow values are not re-classified.
    /// 3. Otherwise classify and dispatch; sticky resolutions from a
    ///    context owning no flow get the generic fallback.
    ///
    /// Never fails: unmatched input degrades to a fallback response.
    pub fn handle_turn(&self, text: &str, session: &SessionState) -> BotResponse {
        if text.to_lowercase().contains(job_detail::TRIGGER_PHRASE) {
            debug!("Job-detail bypass triggered");
            return job_detail::respond(text, &self.repo);
        }

        if session.context.is_signup_slot() {
            debug!(context = %session.context, "Routing to active signup slot");
            return signup::respond(text, &session.user_data);
        }

        match intent::classify(text, session.context) {
            Some(intent) => self.dispatch(intent, text, session),
            None => fallback_response(),
        }
    }

    fn dispatch(&self, intent: Intent, text: &str, session: &SessionState) -> BotResponse {
        debug!(?intent, "Dispatching turn");
        match intent {
            Intent::Greeting => greeting::respond(),
            Intent::Jobs => jobs::respond(text, &self.repo),
            Intent::Events => events::respond(text, &self.repo),
            Intent::Signup => signup::respond(text, &session.user_data),
            Intent::Profile => profile::respond(text, &session.user_data),
            Intent::Mentorship => mentorship::respond(text, &self.repo),
            Intent::JobDetail => job_detail::respond(text, &self.repo),
            Intent::Faq => faq::respond(text, &self.repo, &self.config),
        }
    }
}

/// Generic clarification response for turns nothing else claims.
fn fallback_response() -> BotResponse {
    BotResponse {
        text: "I'm not sure I understood that. Could you tell me if you're looking for job \
               opportunities, events, mentorship, or something else?"
            .to_string(),
        new_context: Some(Context::Greeting),
        quick_replies: quick_replies(&["Jobs", "Events", "Mentorship", "Create account", "Help"]),
        ..Default::default()
    }
}
