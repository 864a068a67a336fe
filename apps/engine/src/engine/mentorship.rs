//! Mentorship handler: filters mentors by mentioned expertise areas.

use crate::models::content::Mentor;
use crate::models::response::{quick_replies, BotResponse, Card, CardAction};
use crate::repository::ContentRepository;

/// Expertise keywords scanned for in the user's message.
const EXPERTISE_AREAS: &[&str] = &[
    "technology",
    "entrepreneurship",
    "career",
    "leadership",
    "business",
];

pub fn respond(text: &str, repo: &ContentRepository) -> BotResponse {
    let lowered = text.to_lowercase();
    let mentioned: Vec<&str> = EXPERTISE_AREAS
        .iter()
        .copied()
        .filter(|area| lowered.contains(area))
        .collect();

    let filtered: Vec<&Mentor> = if mentioned.is_empty() {
        repo.mentors.iter().collect()
    } else {
        repo.mentors
            .iter()
            .filter(|mentor| {
                mentioned
                    .iter()
                    .any(|area| mentor.expertise.to_lowercase().contains(area))
            })
            .collect()
    };

    let cards = filtered.iter().map(|mentor| mentor_card(mentor)).collect();

    let text = if mentioned.is_empty() {
        "Here are some amazing mentors from our community:".to_string()
    } else {
        format!(
            "Here are mentors with expertise in {}:",
            mentioned.join(", ")
        )
    };

    BotResponse {
        text,
        cards: Some(cards),
        quick_replies: quick_replies(&["Tech mentors", "Business advice", "Career coaching"]),
        ..Default::default()
    }
}

fn mentor_card(mentor: &Mentor) -> Card {
    Card {
        title: mentor.name.clone(),
        description: mentor.expertise.clone(),
        details: vec![
            ("experience".to_string(), mentor.experience.clone()),
            ("availability".to_string(), mentor.availability.clone()),
        ],
        image: mentor.image.clone(),
        action: CardAction {
            label: format!("Connect with {}", mentor.name),
        },
    }
}
