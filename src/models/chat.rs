use chrono::{ DateTime, Local };
use serde::{ Serialize, Deserialize };
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Which side of the conversation a rendered message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    Error,
}

/// One render command for the UI surface. Owned by the surface once emitted;
/// holds no reference back into the history.
#[derive(Clone, Debug)]
pub struct RenderedMessage {
    pub id: Uuid,
    pub sender: Sender,
    /// HTML for user/bot messages; plain text for error messages.
    pub html: String,
    pub timestamp: DateTime<Local>,
}

impl RenderedMessage {
    pub fn new(sender: Sender, html: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            html: html.into(),
            timestamp: Local::now(),
        }
    }
}
