//! Content item models: jobs, events, mentors, and FAQ entries.
//!
//! All items are immutable once loaded. `image` fields are opaque path or
//! URL strings resolved by the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A job opening listed on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub experience: String,
    pub image: String,
}

/// A community event with a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub image: String,
}

/// A mentor available for connection requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub expertise: String,
    pub experience: String,
    pub availability: String,
    pub image: String,
}

/// A question/answer pair served by the FAQ handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serializes_as_type() {
        let job = Job {
            id: "job9".to_string(),
            title: "QA Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Test things".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            experience: "1-2 years".to_string(),
            image: "/images/qa.png".to_string(),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["type"], "Full-time");
        assert!(json.get("job_type").is_none());
    }

    #[test]
    fn test_event_date_round_trips_iso() {
        let json = r#"{
            "id": "event9",
            "title": "Demo Day",
            "description": "Pitch night",
            "date": "2025-06-15",
            "location": "Bangalore",
            "image": "/images/demo.png"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["date"], "2025-06-15");
    }
}
