use serde::{Deserialize, Serialize};

use super::content_type::ContentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Message category. `Welcome` only ever appears on the synthetic greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Article,
    Story,
    Welcome,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Article => "article",
            MessageKind::Story => "story",
            MessageKind::Welcome => "welcome",
        }
    }
}

impl From<ContentType> for MessageKind {
    fn from(value: ContentType) -> Self {
        match value {
            ContentType::Article => MessageKind::Article,
            ContentType::Story => MessageKind::Story,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Copy and download are offered on generated content only.
    pub fn has_actions(&self) -> bool {
        self.sender == Sender::Bot && self.kind != MessageKind::Welcome
    }

    /// Badge shown on user requests.
    pub fn request_badge(&self) -> Option<&'static str> {
        if !self.is_user() {
            return None;
        }
        match self.kind {
            MessageKind::Article => Some("Article Request"),
            MessageKind::Story => Some("Story Request"),
            MessageKind::Welcome => None,
        }
    }

    /// Counts space-separated segments, the same way the word badge does.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }

    pub fn download_filename(&self) -> String {
        format!("mr-bukkan-{}-{}.txt", self.kind.as_str(), self.id)
    }
}
