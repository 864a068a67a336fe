//! Profile handler: routes an update request to one of six profile
//! aspects by synonym match, in fixed declaration order.

use crate::models::response::{BotResponse, Icon, MenuOption};
use crate::models::session::{Context, ProfileAspect, UserData};

/// Ordered (aspect, synonym-list) table. First aspect with a substring hit
/// is selected.
const ASPECT_TABLE: &[(ProfileAspect, &[&str])] = &[
    (ProfileAspect::Name, &["name", "full name", "username"]),
    (ProfileAspect::Email, &["email", "email address", "mail"]),
    (ProfileAspect::Password, &["password", "passcode", "secret"]),
    (
        ProfileAspect::Interests,
        &["interests", "preferences", "topics"],
    ),
    (
        ProfileAspect::Photo,
        &["photo", "picture", "profile pic", "avatar", "image"],
    ),
    (
        ProfileAspect::Bio,
        &["bio", "about me", "description", "about", "background"],
    ),
];

pub fn respond(text: &str, user: &UserData) -> BotResponse {
    if !user.is_registered {
        return BotResponse {
            text: "You'll need to create an account first before setting up your profile. \
                   Would you like to do that now?"
                .to_string(),
            new_context: Some(Context::Signup),
            options: Some(vec![
                MenuOption::new("Yes, create account", Icon::User),
                MenuOption::new("Not now", Icon::Link),
            ]),
            ..Default::default()
        };
    }

    let lowered = text.to_lowercase();
    let aspect = ASPECT_TABLE
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|synonym| lowered.contains(synonym)))
        .map(|(aspect, _)| *aspect);

    match aspect {
        Some(aspect) => BotResponse {
            text: format!(
                "Got it! I can help you update your {}. What would you like to change it to?",
                aspect.as_str()
            ),
            new_context: Some(Context::ProfileUpdate(aspect)),
            ..Default::default()
        },
        None => BotResponse {
            text: "What aspect of your profile would you like to update?".to_string(),
            new_context: Some(Context::Profile),
            options: Some(vec![
                MenuOption::new("Update my name", Icon::User),
                MenuOption::new("Change email address", Icon::Link),
                MenuOption::new("Update interests", Icon::Book),
                MenuOption::new("Upload new photo", Icon::User),
            ]),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered() -> UserData {
        UserData {
            name: Some("Maria".to_string()),
            email: Some("maria@x.com".to_string()),
            interests: vec!["Mentorship".to_string()],
            is_registered: true,
        }
    }

    #[test]
    fn test_unregistered_user_is_sent_to_signup() {
        let response = respond("update my bio", &UserData::default());
        assert_eq!(response.new_context, Some(Context::Signup));
        assert!(response.text.starts_with("You'll need to create an account"));
    }

    #[test]
    fn test_aspect_match_sets_update_context() {
        let response = respond("i want to change my password", &registered());
        assert_eq!(
            response.new_context,
            Some(Context::ProfileUpdate(ProfileAspect::Password))
        );
        assert!(response.text.contains("update your password"));
    }

    #[test]
    fn test_first_aspect_in_order_wins() {
        // "username and email" hits both name and email synonyms; name is
        // declared first.
        let response = respond("update my username and email", &registered());
        assert_eq!(
            response.new_context,
            Some(Context::ProfileUpdate(ProfileAspect::Name))
        );
    }

    #[test]
    fn test_avatar_synonym_maps_to_photo() {
        let response = respond("new avatar please", &registered());
        assert_eq!(
            response.new_context,
            Some(Context::ProfileUpdate(ProfileAspect::Photo))
        );
    }

    #[test]
    fn test_no_synonym_match_returns_menu() {
        let response = respond("fix my stuff", &registered());
        assert_eq!(response.new_context, Some(Context::Profile));
        assert_eq!(response.options.unwrap().len(), 4);
    }
}
