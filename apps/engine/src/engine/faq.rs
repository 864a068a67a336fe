//! FAQ handler: keyword-overlap scoring over the question texts.
//!
//! Score = number of a question's words (longer than the configured floor,
//! whitespace-split with punctuation retained) contained in the lowered
//! input. The strictly highest score wins, first entry on ties. No fuzzy
//! matching, no stemming.

use tracing::debug;

use crate::engine::EngineConfig;
use crate::models::content::FaqEntry;
use crate::models::response::{quick_replies, BotResponse, Icon, MenuOption};
use crate::repository::ContentRepository;

const ASHA_DESCRIPTION: &str =
    "ASHA (Alliance for Supporting Her Ambition) is a platform that connects women \
     professionals with opportunities, mentors, and resources to advance their careers and \
     entrepreneurial journeys. We offer job listings, networking events, mentorship programs, \
     and a supportive community for women in all stages of their professional journey.";

pub fn respond(text: &str, repo: &ContentRepository, config: &EngineConfig) -> BotResponse {
    let lowered = text.to_lowercase();

    let mut best_match: Option<&FaqEntry> = None;
    let mut best_score = 0;

    for faq in &repo.faqs {
        let score = overlap_score(&faq.question, &lowered, config.faq_min_word_len);
        if score > best_score {
            best_score = score;
            best_match = Some(faq);
        }
    }

    debug!(best_score, "FAQ scoring complete");

    if best_score >= config.faq_score_threshold {
        if let Some(faq) = best_match {
            return BotResponse {
                text: faq.answer.clone(),
                quick_replies: quick_replies(&[
                    "Tell me more about ASHA",
                    "How to sign up",
                    "Find a mentor",
                ]),
                ..Default::default()
            };
        }
    }

    // No specific FAQ hit, but the user is asking about the platform itself.
    if lowered.contains("asha") && lowered.contains("what") {
        return BotResponse {
            text: ASHA_DESCRIPTION.to_string(),
            quick_replies: quick_replies(&["How do I join?", "Show me opportunities", "Find events"]),
            ..Default::default()
        };
    }

    BotResponse {
        text: "That's a great question! While I don't have a specific answer for that, I can \
               help you explore our platform to find what you're looking for. Would you like \
               to see our job listings, upcoming events, or connect with a mentor?"
            .to_string(),
        options: Some(vec![
            MenuOption::new("Explore jobs", Icon::Link),
            MenuOption::new("See events", Icon::Calendar),
            MenuOption::new("Find mentors", Icon::User),
            MenuOption::new("Contact support", Icon::Link),
        ]),
        ..Default::default()
    }
}

/// Counts question words longer than `min_word_len` that appear as
/// substrings of the lowered input. The question is whitespace-split with
/// punctuation kept attached, so "ASHA?" only matches input containing
/// "asha?".
fn overlap_score(question: &str, lowered_input: &str, min_word_len: usize) -> usize {
    question
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > min_word_len && lowered_input.contains(word))
        .count()
}
