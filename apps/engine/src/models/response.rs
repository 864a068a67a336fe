//! The structured response a handler returns for one turn.
//!
//! The presentation layer renders `text` as message bubbles, `options` as
//! buttons, `quick_replies` as chips, and `cards` as a carousel. Fields the
//! handler leaves unset are omitted from the serialized form, matching the
//! shape the chat surface consumes.

use serde::{Deserialize, Serialize};

use crate::models::session::{Context, UserDataPatch};

/// Icon tag attached to a menu option, resolved by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Link,
    Calendar,
    User,
    Book,
}

/// One button in an option menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    pub label: String,
    pub icon: Icon,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, icon: Icon) -> Self {
        MenuOption {
            label: label.into(),
            icon,
        }
    }
}

/// The call-to-action attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    pub label: String,
}

/// A richly formatted response unit for one content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Ordered named display fields, e.g. ("location", "Remote").
    pub details: Vec<(String, String)>,
    pub image: String,
    pub action: CardAction,
}

/// The full output of one dialogue turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserDataPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<MenuOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

impl BotResponse {
    /// A bare text response with no menu, patch, or context change.
    pub fn text(text: impl Into<String>) -> Self {
        BotResponse {
            text: text.into(),
            ..Default::default()
        }
    }
}

pub(crate) fn quick_replies(labels: &[&str]) -> Option<Vec<String>> {
    Some(labels.iter().map(|label| label.to_string()).collect())
}
