//! Signup handler: a three-slot sequential form (name, email, interest).
//!
//! Which slot is asked for next is driven entirely by which `UserData`
//! fields are already populated; there is no step counter. Once registered
//! the flow is idempotent and lands in the already-registered branch.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::response::{quick_replies, BotResponse, Icon, MenuOption};
use crate::models::session::{Context, UserData, UserDataPatch};

/// Phrases that start the flow instead of being captured as a name.
const START_PHRASES: &[&str] = &["create account", "sign up", "create my account"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local@domain.tld with no whitespace or extra '@' in any part.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn respond(text: &str, user: &UserData) -> BotResponse {
    if user.name.is_none() {
        ask_or_capture_name(text)
    } else if user.email.is_none() {
        capture_email(text)
    } else if user.interests.is_empty() {
        capture_interest(text, user)
    } else {
        already_registered()
    }
}

fn ask_or_capture_name(text: &str) -> BotResponse {
    let lowered = text.to_lowercase();
    if START_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return BotResponse {
            text: "Awesome! Let's get you set up with an ASHA account. First, what's your name?"
                .to_string(),
            new_context: Some(Context::SignupName),
            ..Default::default()
        };
    }

    // Anything else is taken verbatim as the name.
    BotResponse {
        text: format!(
            "Great to meet you, {text}! Now, what email would you like to use for your account?"
        ),
        new_context: Some(Context::SignupEmail),
        user_data: Some(UserDataPatch {
            name: Some(text.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn capture_email(text: &str) -> BotResponse {
    if !EMAIL_RE.is_match(text) {
        // Re-prompt without advancing; the email slot stays empty.
        return BotResponse {
            text: "That doesn't look like a valid email address. Could you please enter a \
                   valid email?"
                .to_string(),
            new_context: Some(Context::SignupEmail),
            ..Default::default()
        };
    }

    BotResponse {
        text: "Thanks! Now, what are you most interested in? This helps us personalize your \
               experience."
            .to_string(),
        new_context: Some(Context::SignupInterests),
        user_data: Some(UserDataPatch {
            email: Some(text.to_string()),
            ..Default::default()
        }),
        options: Some(vec![
            MenuOption::new("Career opportunities", Icon::Link),
            MenuOption::new("Networking events", Icon::Calendar),
            MenuOption::new("Mentorship", Icon::User),
            MenuOption::new("Entrepreneurship", Icon::Book),
        ]),
        ..Default::default()
    }
}

fn capture_interest(text: &str, user: &UserData) -> BotResponse {
    let name = user.name.as_deref().unwrap_or_default();
    BotResponse {
        text: format!(
            "Perfect! {name}, your account has been created successfully! 🎉 You can now \
             explore jobs, events, and connect with mentors. What would you like to check \
             out first?"
        ),
        new_context: Some(Context::Greeting),
        user_data: Some(UserDataPatch {
            interests: Some(vec![text.to_string()]),
            is_registered: Some(true),
            ..Default::default()
        }),
        options: Some(vec![
            MenuOption::new("Explore jobs", Icon::Link),
            MenuOption::new("See upcoming events", Icon::Calendar),
            MenuOption::new("Find a mentor", Icon::User),
        ]),
        ..Default::default()
    }
}

fn already_registered() -> BotResponse {
    BotResponse {
        text: "You're already registered with us! Is there something specific you'd like to \
               explore or update in your profile?"
            .to_string(),
        new_context: Some(Context::Greeting),
        quick_replies: quick_replies(&["Update profile", "Explore opportunities", "Find events"]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(name: Option<&str>, email: Option<&str>, interests: &[&str]) -> UserData {
        UserData {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            is_registered: false,
        }
    }

    #[test]
    fn test_start_phrase_prompts_for_name_without_capturing() {
        let response = respond("I want to create account", &UserData::default());
        assert_eq!(response.new_context, Some(Context::SignupName));
        assert!(response.user_data.is_none());
    }

    #[test]
    fn test_raw_input_is_captured_as_name() {
        let response = respond("Maria", &UserData::default());
        assert_eq!(response.new_context, Some(Context::SignupEmail));
        let patch = response.user_data.unwrap();
        assert_eq!(patch.name.as_deref(), Some("Maria"));
        assert!(response.text.contains("Great to meet you, Maria!"));
    }

    #[test]
    fn test_valid_email_advances_to_interests() {
        let user = with(Some("Maria"), None, &[]);
        let response = respond("maria@x.com", &user);
        assert_eq!(response.new_context, Some(Context::SignupInterests));
        assert_eq!(response.user_data.unwrap().email.as_deref(), Some("maria@x.com"));
        assert_eq!(response.options.unwrap().len(), 4);
    }

    #[test]
    fn test_invalid_emails_reprompt_without_advancing() {
        let user = with(Some("Maria"), None, &[]);
        for bad in ["maria", "maria@", "maria@x", "ma ria@x.com", "@x.com", "a@b@c.com"] {
            let response = respond(bad, &user);
            assert_eq!(response.new_context, Some(Context::SignupEmail), "input: {bad}");
            assert!(response.user_data.is_none(), "input: {bad}");
        }
    }

    #[test]
    fn test_interest_completes_registration() {
        let user = with(Some("Maria"), Some("maria@x.com"), &[]);
        let response = respond("Mentorship", &user);
        assert_eq!(response.new_context, Some(Context::Greeting));
        let patch = response.user_data.unwrap();
        assert_eq!(patch.interests.as_deref(), Some(&["Mentorship".to_string()][..]));
        assert_eq!(patch.is_registered, Some(true));
        assert!(response.text.contains("Maria"));
    }

    #[test]
    fn test_fully_registered_is_idempotent() {
        let mut user = with(Some("Maria"), Some("maria@x.com"), &["Mentorship"]);
        user.is_registered = true;
        let response = respond("sign up", &user);
        assert!(response.text.starts_with("You're already registered"));
        assert_eq!(response.new_context, Some(Context::Greeting));
        assert!(response.user_data.is_none());
    }
}
