//! Jobs handler: filters the job repository by mentioned job types and
//! emits one card per surviving job.

use crate::models::content::Job;
use crate::models::response::{quick_replies, BotResponse, Card, CardAction};
use crate::repository::ContentRepository;

/// Job-type keywords scanned for in the user's message.
const JOB_TYPES: &[&str] = &["full-time", "part-time", "remote", "freelance", "internship"];

pub fn respond(text: &str, repo: &ContentRepository) -> BotResponse {
    let lowered = text.to_lowercase();
    let mentioned: Vec<&str> = JOB_TYPES
        .iter()
        .copied()
        .filter(|job_type| lowered.contains(job_type))
        .collect();

    let filtered: Vec<&Job> = if mentioned.is_empty() {
        repo.jobs.iter().collect()
    } else {
        repo.jobs
            .iter()
            .filter(|job| {
                mentioned.iter().any(|job_type| {
                    job.job_type.to_lowercase().contains(job_type)
                        || job.location.to_lowercase().contains(job_type)
                })
            })
            .collect()
    };

    let cards = filtered.iter().map(|job| job_card(job)).collect();

    let text = if mentioned.is_empty() {
        "Check out these job opportunities from the ASHA network:".to_string()
    } else {
        format!(
            "Here are some {} opportunities I found:",
            mentioned.join(", ")
        )
    };

    BotResponse {
        text,
        cards: Some(cards),
        quick_replies: quick_replies(&["Full-time jobs", "Remote work", "Entry-level positions"]),
        ..Default::default()
    }
}

fn job_card(job: &Job) -> Card {
    Card {
        title: job.title.clone(),
        description: format!("{} • {}", job.company, job.job_type),
        details: vec![
            ("location".to_string(), job.location.clone()),
            ("experience".to_string(), job.experience.clone()),
        ],
        image: job.image.clone(),
        action: CardAction {
            label: format!("Tell me about {}", job.title),
        },
    }
}
