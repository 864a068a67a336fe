//! Greeting handler and the session-opening message.

use crate::models::response::{BotResponse, Icon, MenuOption};

/// Fixed welcome with the four main menu options. No branching.
pub fn respond() -> BotResponse {
    BotResponse {
        text: "Hey there! 👋 Welcome to ASHA! I'm Sakhi, your personal community assistant. \
               What brings you here today?"
            .to_string(),
        options: Some(vec![
            MenuOption::new("Find a job", Icon::Link),
            MenuOption::new("Discover events", Icon::Calendar),
            MenuOption::new("Connect with mentors", Icon::User),
            MenuOption::new("Create my account", Icon::User),
        ]),
        ..Default::default()
    }
}

/// The first bot message of a session, with a time-of-day salutation.
/// The hour is injected by the caller so the message stays deterministic.
pub fn initial_greeting(hour: u32) -> BotResponse {
    let salutation = if hour < 12 {
        "Good morning! "
    } else if hour < 17 {
        "Good afternoon! "
    } else {
        "Good evening! "
    };

    BotResponse {
        text: format!(
            "{salutation}I'm Sakhi, your ASHA community assistant. I can help you discover \
             opportunities, sign up for an account, answer questions, and more. How can I \
             assist you today?"
        ),
        options: Some(vec![
            MenuOption::new("Explore opportunities", Icon::Book),
            MenuOption::new("Create an account", Icon::User),
            MenuOption::new("Ask a question", Icon::Link),
        ]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_starts_hey_there_with_four_options() {
        let response = respond();
        assert!(response.text.starts_with("Hey there!"));
        assert_eq!(response.options.as_ref().unwrap().len(), 4);
        assert!(response.new_context.is_none());
    }

    #[test]
    fn test_initial_greeting_salutation_by_hour() {
        assert!(initial_greeting(8).text.starts_with("Good morning!"));
        assert!(initial_greeting(12).text.starts_with("Good afternoon!"));
        assert!(initial_greeting(16).text.starts_with("Good afternoon!"));
        assert!(initial_greeting(21).text.starts_with("Good evening!"));
    }

    #[test]
    fn test_initial_greeting_has_three_options() {
        assert_eq!(initial_greeting(9).options.unwrap().len(), 3);
    }
}
