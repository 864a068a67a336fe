//! Session state: the conversational context, collected user profile
//! fields, and prior bot messages for a single chat session.
//!
//! The state is owned by the calling surface. Each turn it is passed by
//! value into the engine and the returned `BotResponse` is merged back via
//! [`SessionState::absorb`]. Nothing here survives the session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::response::BotResponse;

/// A profile field the user can ask to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileAspect {
    Name,
    Email,
    Password,
    Interests,
    Photo,
    Bio,
}

impl ProfileAspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileAspect::Name => "name",
            ProfileAspect::Email => "email",
            ProfileAspect::Password => "password",
            ProfileAspect::Interests => "interests",
            ProfileAspect::Photo => "photo",
            ProfileAspect::Bio => "bio",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            "name" => ProfileAspect::Name,
            "email" => ProfileAspect::Email,
            "password" => ProfileAspect::Password,
            "interests" => ProfileAspect::Interests,
            "photo" => ProfileAspect::Photo,
            "bio" => ProfileAspect::Bio,
            _ => return None,
        })
    }
}

/// The current position within a multi-turn dialogue flow.
///
/// Serialized as the flat label the chat surface historically stored
/// ("signup_email", "profile_update_bio", ...). The label set is closed;
/// a turn arriving with a label outside it is treated as FAQ intent by the
/// classifier, so unknown labels never reach a handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Context {
    #[default]
    Greeting,
    Jobs,
    Events,
    Mentorship,
    Faq,
    Signup,
    SignupName,
    SignupEmail,
    SignupInterests,
    Profile,
    ProfileUpdate(ProfileAspect),
    JobApplication,
}

impl Context {
    pub fn as_label(&self) -> String {
        match self {
            Context::Greeting => "greeting".to_string(),
            Context::Jobs => "jobs".to_string(),
            Context::Events => "events".to_string(),
            Context::Mentorship => "mentorship".to_string(),
            Context::Faq => "faq".to_string(),
            Context::Signup => "signup".to_string(),
            Context::SignupName => "signup_name".to_string(),
            Context::SignupEmail => "signup_email".to_string(),
            Context::SignupInterests => "signup_interests".to_string(),
            Context::Profile => "profile".to_string(),
            Context::ProfileUpdate(aspect) => format!("profile_update_{}", aspect.as_str()),
            Context::JobApplication => "job_application".to_string(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Some(match label {
            "greeting" => Context::Greeting,
            "jobs" => Context::Jobs,
            "events" => Context::Events,
            "mentorship" => Context::Mentorship,
            "faq" => Context::Faq,
            "signup" => Context::Signup,
            "signup_name" => Context::SignupName,
            "signup_email" => Context::SignupEmail,
            "signup_interests" => Context::SignupInterests,
            "profile" => Context::Profile,
            "job_application" => Context::JobApplication,
            other => {
                let aspect = other.strip_prefix("profile_update_")?;
                Context::ProfileUpdate(ProfileAspect::from_str(aspect)?)
            }
        })
    }

    /// True for the signup slot-filling sub-states. While one of these is
    /// active the orchestrator routes raw input straight to the signup
    /// handler, since names, emails, and interest labels must not be
    /// re-classified as fresh intents mid-flow.
    pub fn is_signup_slot(&self) -> bool {
        matches!(
            self,
            Context::SignupName | Context::SignupEmail | Context::SignupInterests
        )
    }
}

impl From<Context> for String {
    fn from(context: Context) -> Self {
        context.as_label()
    }
}

impl TryFrom<String> for Context {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Context::from_label(&label).ok_or_else(|| format!("unknown context label '{label}'"))
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_label())
    }
}

/// Profile fields collected during signup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub interests: Vec<String>,
    pub is_registered: bool,
}

/// A partial update to [`UserData`]. Only keys present in the patch are
/// written; merge is therefore additive and signup fills fields
/// monotonically (the flow never emits a clearing patch).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
}

impl UserData {
    /// Shallow-merges a patch: a value present in the patch overwrites the
    /// stored one, absent keys are retained.
    pub fn apply(&mut self, patch: &UserDataPatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
        if let Some(interests) = &patch.interests {
            self.interests = interests.clone();
        }
        if let Some(is_registered) = patch.is_registered {
            self.is_registered = is_registered;
        }
    }
}

/// Per-session conversation state, created empty at session start and
/// discarded when the session ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    pub context: Context,
    pub user_data: UserData,
    /// Prior bot messages, append-only within the session. Unused by the
    /// handlers today but part of the turn contract.
    pub history: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            id: Uuid::new_v4(),
            context: Context::Greeting,
            user_data: UserData::default(),
            history: Vec::new(),
        }
    }

    /// Merges a turn's response into the session: replace the context when
    /// the response carries one, shallow-merge the user-data patch, and
    /// append the bot text to the history.
    pub fn absorb(&mut self, response: &BotResponse) {
        if let Some(context) = response.new_context {
            self.context = context;
        }
        if let Some(patch) = &response.user_data {
            self.user_data.apply(patch);
        }
        self.history.push(response.text.clone());
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_labels_round_trip() {
        let all = [
            Context::Greeting,
            Context::Jobs,
            Context::Events,
            Context::Mentorship,
            Context::Faq,
            Context::Signup,
            Context::SignupName,
            Context::SignupEmail,
            Context::SignupInterests,
            Context::Profile,
            Context::ProfileUpdate(ProfileAspect::Bio),
            Context::JobApplication,
        ];
        for context in all {
            assert_eq!(Context::from_label(&context.as_label()), Some(context));
        }
    }

    #[test]
    fn test_profile_update_label_shape() {
        let context = Context::ProfileUpdate(ProfileAspect::Photo);
        assert_eq!(context.as_label(), "profile_update_photo");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert_eq!(Context::from_label("voice_input"), None);
        assert_eq!(Context::from_label("profile_update_shoesize"), None);
    }

    #[test]
    fn test_context_serde_uses_labels() {
        let json = serde_json::to_string(&Context::SignupEmail).unwrap();
        assert_eq!(json, r#""signup_email""#);
        let back: Context = serde_json::from_str(r#""profile_update_bio""#).unwrap();
        assert_eq!(back, Context::ProfileUpdate(ProfileAspect::Bio));
    }

    #[test]
    fn test_patch_overwrites_only_present_keys() {
        let mut user = UserData {
            name: Some("Maria".to_string()),
            email: None,
            interests: vec![],
            is_registered: false,
        };
        user.apply(&UserDataPatch {
            email: Some("maria@x.com".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name.as_deref(), Some("Maria"));
        assert_eq!(user.email.as_deref(), Some("maria@x.com"));
        assert!(!user.is_registered);
    }

    #[test]
    fn test_absorb_keeps_context_when_response_has_none() {
        let mut session = SessionState::new();
        session.context = Context::Jobs;
        let response = BotResponse {
            text: "Check out these job opportunities".to_string(),
            ..Default::default()
        };
        session.absorb(&response);
        assert_eq!(session.context, Context::Jobs);
        assert_eq!(session.history.len(), 1);
    }
}
