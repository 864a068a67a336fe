//! Content repository: the immutable job/event/mentor/FAQ collections the
//! handlers read from.
//!
//! The repository is built once at startup and injected into the engine;
//! handlers never mutate it. `Default` seeds the stock ASHA dataset;
//! [`ContentRepository::from_json_file`] loads the same shape from disk so
//! real data sources can be substituted without touching handler logic.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::content::{Event, FaqEntry, Job, Mentor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRepository {
    pub jobs: Vec<Job>,
    pub events: Vec<Event>,
    pub mentors: Vec<Mentor>,
    pub faqs: Vec<FaqEntry>,
}

impl ContentRepository {
    /// Loads a repository from a JSON file with the same top-level shape as
    /// the seeded dataset.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let repo: ContentRepository = serde_json::from_str(&raw)
            .map_err(|e| AppError::Data(format!("{}: {e}", path.display())))?;
        info!(
            jobs = repo.jobs.len(),
            events = repo.events.len(),
            mentors = repo.mentors.len(),
            faqs = repo.faqs.len(),
            "Loaded content repository from {}",
            path.display()
        );
        Ok(repo)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seeded dates are compile-time constants and always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Default for ContentRepository {
    fn default() -> Self {
        ContentRepository {
            jobs: vec![
                Job {
                    id: "job1".to_string(),
                    title: "Software Developer".to_string(),
                    company: "TechNova".to_string(),
                    description: "Join our team to build innovative solutions for women in tech"
                        .to_string(),
                    location: "Remote".to_string(),
                    job_type: "Full-time".to_string(),
                    experience: "2-5 years".to_string(),
                    image: "/images/software.webp".to_string(),
                },
                Job {
                    id: "job2".to_string(),
                    title: "Community Manager".to_string(),
                    company: "ASHA Network".to_string(),
                    description: "Help grow our vibrant community of women entrepreneurs"
                        .to_string(),
                    location: "Mumbai, India".to_string(),
                    job_type: "Part-time".to_string(),
                    experience: "1-2 years".to_string(),
                    image: "/images/community.jpeg".to_string(),
                },
                Job {
                    id: "job3".to_string(),
                    title: "Content Creator".to_string(),
                    company: "SheStartup".to_string(),
                    description: "Create engaging content for women-led businesses".to_string(),
                    location: "Hybrid".to_string(),
                    job_type: "Freelance".to_string(),
                    experience: "0-1 years".to_string(),
                    image: "/images/content.jpeg".to_string(),
                },
            ],
            events: vec![
                Event {
                    id: "event1".to_string(),
                    title: "Women in Tech Summit".to_string(),
                    description: "Annual conference featuring talks from top women tech leaders"
                        .to_string(),
                    date: date(2025, 6, 15),
                    location: "Bangalore".to_string(),
                    image: "/images/women-in-tech-summit-nowords.png".to_string(),
                },
                Event {
                    id: "event2".to_string(),
                    title: "Entrepreneurship Workshop".to_string(),
                    description: "Learn how to start and scale your business".to_string(),
                    date: date(2025, 5, 20),
                    location: "Delhi".to_string(),
                    image: "/images/workshop.jpg".to_string(),
                },
                Event {
                    id: "event3".to_string(),
                    title: "Networking Mixer".to_string(),
                    description: "Connect with like-minded women in your industry".to_string(),
                    date: date(2025, 5, 10),
                    location: "Virtual".to_string(),
                    image: "/images/network.jpg".to_string(),
                },
            ],
            mentors: vec![
                Mentor {
                    id: "mentor1".to_string(),
                    name: "Priya Sharma".to_string(),
                    expertise: "Technology Leadership".to_string(),
                    experience: "15+ years in tech".to_string(),
                    availability: "Weekends".to_string(),
                    image: "/images/priya.jpg".to_string(),
                },
                Mentor {
                    id: "mentor2".to_string(),
                    name: "Aisha Patel".to_string(),
                    expertise: "Entrepreneurship".to_string(),
                    experience: "Founded 3 successful startups".to_string(),
                    availability: "Weekday evenings".to_string(),
                    image: "/images/aisha.jpg".to_string(),
                },
                Mentor {
                    id: "mentor3".to_string(),
                    name: "Divya Gupta".to_string(),
                    expertise: "Career Coaching".to_string(),
                    experience: "10+ years in HR".to_string(),
                    availability: "Flexible".to_string(),
                    image: "/images/divya.jpg".to_string(),
                },
            ],
            faqs: vec![
                FaqEntry {
                    question: "What is ASHA?".to_string(),
                    answer: "ASHA (Alliance for Supporting Her Ambition) is a platform that \
                             connects women professionals with opportunities, mentors, and \
                             resources to advance their careers and entrepreneurial journeys."
                        .to_string(),
                },
                FaqEntry {
                    question: "How do I sign up?".to_string(),
                    answer: "You can sign up by clicking the \"Join Now\" button or just tell \
                             me you want to create an account, and I'll guide you through the \
                             process!"
                        .to_string(),
                },
                FaqEntry {
                    question: "Is ASHA free to use?".to_string(),
                    answer: "Yes! ASHA's core features are free for all users. We also offer \
                             premium memberships with additional benefits like unlimited \
                             mentor sessions and exclusive workshops."
                        .to_string(),
                },
                FaqEntry {
                    question: "How do I find a mentor?".to_string(),
                    answer: "You can browse our mentor directory or tell me what kind of \
                             guidance you're looking for, and I'll recommend suitable mentors \
                             for you."
                        .to_string(),
                },
                FaqEntry {
                    question: "Can I post job opportunities?".to_string(),
                    answer: "Yes! Organizations can post job opportunities that align with our \
                             community's skills and interests. You can register as an \
                             organization to post jobs."
                        .to_string(),
                },
                FaqEntry {
                    question: "How do I update my profile?".to_string(),
                    answer: "You can update your profile by going to your account settings or \
                             simply tell me what you want to update, and I'll help you through \
                             the process."
                        .to_string(),
                },
            ],
        }
    }
}
