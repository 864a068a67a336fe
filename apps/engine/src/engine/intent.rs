//! Keyword-based intent classification.
//!
//! The table below is the behavioral contract of the classifier: it is
//! evaluated top to bottom and the first intent with any substring hit
//! wins, so on ambiguous input ("hi, tell me about jobs") earlier entries
//! take precedence. Changing the order or the keyword lists changes
//! conversation behavior; treat the table as versioned data.

use tracing::debug;

use crate::models::session::Context;

/// Symbolic label classifying the purpose of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Jobs,
    Events,
    Signup,
    Profile,
    Mentorship,
    JobDetail,
    Faq,
}

/// Ordered (intent, keyword-list) precedence table. First match wins.
pub const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[
            "hello",
            "hi",
            "hey",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
    ),
    (
        Intent::Jobs,
        &[
            "job",
            "career",
            "work",
            "hiring",
            "employment",
            "position",
            "vacancy",
            "opportunities",
            "explore opportunities",
        ],
    ),
    (
        Intent::Events,
        &["event", "workshop", "conference", "webinar", "meetup", "session"],
    ),
    (
        Intent::Signup,
        &["sign up", "register", "create account", "join", "become member"],
    ),
    (
        Intent::Profile,
        &["profile", "account", "settings", "update", "change", "edit"],
    ),
    (
        Intent::Mentorship,
        &["mentor", "guidance", "advice", "coach", "mentorship"],
    ),
    (Intent::JobDetail, &["tell me about"]),
    (
        Intent::Faq,
        &[
            "question", "help", "how do i", "what is", "can i", "faq", "who", "when", "where",
            "why",
        ],
    ),
];

impl Context {
    /// The intent owning this context's flow, used for the sticky-context
    /// fallback. `Greeting` is the resting state and is never sticky;
    /// `JobApplication` and the `profile_update_*` states own no
    /// dispatchable flow, so a turn resolved from them falls through to the
    /// orchestrator's generic response.
    pub(crate) fn owning_intent(&self) -> Option<Intent> {
        match self {
            Context::Greeting => None,
            Context::Jobs => Some(Intent::Jobs),
            Context::Events => Some(Intent::Events),
            Context::Mentorship => Some(Intent::Mentorship),
            Context::Faq => Some(Intent::Faq),
            Context::Signup
            | Context::SignupName
            | Context::SignupEmail
            | Context::SignupInterests => Some(Intent::Signup),
            Context::Profile => Some(Intent::Profile),
            Context::ProfileUpdate(_) => None,
            Context::JobApplication => None,
        }
    }
}

/// Classifies an utterance.
///
/// Returns `Some(intent)` for a keyword hit, a sticky resolution from the
/// current context, or the FAQ default. Returns `None` only when the
/// current context is sticky but owns no dispatchable intent; the
/// orchestrator answers those turns with its generic response.
pub fn classify(text: &str, context: Context) -> Option<Intent> {
    let lowered = text.to_lowercase();

    for (intent, keywords) in INTENT_TABLE {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            debug!(?intent, "Classified by keyword match");
            return Some(*intent);
        }
    }

    // No keyword hit: maintain the active flow if there is one.
    if context != Context::Greeting {
        let sticky = context.owning_intent();
        debug!(?context, ?sticky, "Sticky-context fallback");
        return sticky;
    }

    Some(Intent::Faq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::ProfileAspect;

    #[test]
    fn test_greeting_wins_over_jobs_on_ambiguous_input() {
        // "hi" and "job" both match; greeting is listed first.
        let intent = classify("hi, tell me about jobs", Context::Greeting);
        assert_eq!(intent, Some(Intent::Greeting));
    }

    #[test]
    fn test_plain_greeting() {
        assert_eq!(classify("hi", Context::Greeting), Some(Intent::Greeting));
    }

    #[test]
    fn test_remote_jobs_classifies_as_jobs() {
        assert_eq!(
            classify("remote jobs", Context::Events),
            Some(Intent::Jobs)
        );
    }

    #[test]
    fn test_signup_beats_profile_in_table_order() {
        // "create account" matches signup; "account" alone would match profile.
        assert_eq!(
            classify("create account", Context::Greeting),
            Some(Intent::Signup)
        );
    }

    #[test]
    fn test_create_my_account_hits_profile_keyword() {
        // "create my account" contains no signup keyword but does contain
        // "account" from the profile list.
        assert_eq!(
            classify("create my account", Context::Greeting),
            Some(Intent::Profile)
        );
    }

    #[test]
    fn test_no_match_defaults_to_faq_from_greeting() {
        assert_eq!(classify("xyzzy", Context::Greeting), Some(Intent::Faq));
    }

    #[test]
    fn test_no_match_sticks_to_active_flow() {
        assert_eq!(classify("Maria", Context::SignupName), Some(Intent::Signup));
        assert_eq!(
            classify("maria@x.com", Context::SignupEmail),
            Some(Intent::Signup)
        );
        assert_eq!(classify("anything", Context::Jobs), Some(Intent::Jobs));
    }

    #[test]
    fn test_unowned_sticky_contexts_fall_through() {
        assert_eq!(classify("apply now", Context::JobApplication), None);
        assert_eq!(
            classify(
                "Grace Hopper",
                Context::ProfileUpdate(ProfileAspect::Name)
            ),
            None
        );
    }

    #[test]
    fn test_keyword_hit_overrides_sticky_context() {
        // Even mid-flow, an explicit keyword wins classification.
        assert_eq!(
            classify("show me events", Context::Jobs),
            Some(Intent::Events)
        );
    }

    #[test]
    fn test_table_order_matches_precedence_contract() {
        let order: Vec<Intent> = INTENT_TABLE.iter().map(|(intent, _)| *intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Greeting,
                Intent::Jobs,
                Intent::Events,
                Intent::Signup,
                Intent::Profile,
                Intent::Mentorship,
                Intent::JobDetail,
                Intent::Faq,
            ]
        );
    }
}
