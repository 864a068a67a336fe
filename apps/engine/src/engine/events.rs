//! Events handler: optional location filter plus human-readable dates.

use crate::models::content::Event;
use crate::models::response::{quick_replies, BotResponse, Card, CardAction};
use crate::repository::ContentRepository;

pub fn respond(text: &str, repo: &ContentRepository) -> BotResponse {
    let lowered = text.to_lowercase();

    // First event location (in repository order) mentioned in the message.
    let mentioned = repo
        .events
        .iter()
        .map(|event| event.location.to_lowercase())
        .find(|location| lowered.contains(location.as_str()));

    let filtered: Vec<&Event> = match &mentioned {
        Some(location) => repo
            .events
            .iter()
            .filter(|event| event.location.to_lowercase() == *location)
            .collect(),
        None => repo.events.iter().collect(),
    };

    let cards = filtered.iter().map(|event| event_card(event)).collect();

    let text = match &mentioned {
        Some(location) => format!("Here are upcoming events in {}:", capitalize(location)),
        None => "Here are some upcoming events you might be interested in:".to_string(),
    };

    BotResponse {
        text,
        cards: Some(cards),
        quick_replies: quick_replies(&["Virtual events", "This month", "Workshops"]),
        ..Default::default()
    }
}

fn event_card(event: &Event) -> Card {
    Card {
        title: event.title.clone(),
        description: event.description.clone(),
        details: vec![
            // e.g. "Jun 15, 2025"
            ("date".to_string(), event.date.format("%b %-d, %Y").to_string()),
            ("location".to_string(), event.location.clone()),
        ],
        image: event.image.clone(),
        action: CardAction {
            label: format!("Register for {}", event.title),
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
