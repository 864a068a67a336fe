//! Job-detail handler: answers "tell me about {title}" requests.
//!
//! The orchestrator routes any input containing the trigger phrase here
//! before classification runs, so this handler sees the raw message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::response::{quick_replies, BotResponse};
use crate::models::session::Context;
use crate::repository::ContentRepository;

/// Case-insensitive containment of this phrase triggers the bypass.
pub const TRIGGER_PHRASE: &str = "tell me about";

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tell me about (.*)").expect("title pattern is valid"));

pub fn respond(text: &str, repo: &ContentRepository) -> BotResponse {
    let title = TITLE_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim());

    if let Some(title) = title {
        let job = repo
            .jobs
            .iter()
            .find(|job| job.title.eq_ignore_ascii_case(title));

        if let Some(job) = job {
            return BotResponse {
                text: format!(
                    "**{title} at {company}**\n\n{description}\n\n• **Location:** {location}\n• \
                     **Job Type:** {job_type}\n• **Experience Required:** {experience}\n\nAre \
                     you interested in applying for this position?",
                    title = job.title,
                    company = job.company,
                    description = job.description,
                    location = job.location,
                    job_type = job.job_type,
                    experience = job.experience,
                ),
                new_context: Some(Context::JobApplication),
                quick_replies: quick_replies(&["Apply now", "See more jobs", "Back to main menu"]),
                ..Default::default()
            };
        }
    }

    // Unknown title (or nothing after the phrase): fall back to the listing.
    BotResponse {
        text: "I couldn't find detailed information about that job. Here are all our current \
               openings:"
            .to_string(),
        new_context: Some(Context::Jobs),
        quick_replies: quick_replies(&["Show all jobs", "Remote jobs", "Entry-level jobs"]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_title_returns_detail_and_application_context() {
        let repo = ContentRepository::default();
        let response = respond("tell me about Software Developer", &repo);
        assert!(response.text.contains("TechNova"));
        assert!(response.text.contains("**Location:** Remote"));
        assert_eq!(response.new_context, Some(Context::JobApplication));
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let repo = ContentRepository::default();
        let response = respond("Tell Me About COMMUNITY MANAGER", &repo);
        assert!(response.text.contains("ASHA Network"));
    }

    #[test]
    fn test_unknown_title_falls_back_to_jobs_context() {
        let repo = ContentRepository::default();
        let response = respond("tell me about Astronaut", &repo);
        assert!(response.text.starts_with("I couldn't find"));
        assert_eq!(response.new_context, Some(Context::Jobs));
        assert_eq!(
            response.quick_replies.unwrap(),
            vec!["Show all jobs", "Remote jobs", "Entry-level jobs"]
        );
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let repo = ContentRepository::default();
        let response = respond("tell me about Content Creator  ", &repo);
        assert!(response.text.contains("SheStartup"));
    }
}
