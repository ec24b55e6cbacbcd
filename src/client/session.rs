//! One chat session: the append-only message list plus input/loading state.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use super::actions::{save_text, ActionError, Clipboard, COPY_ACK};
use super::relay::RelayClient;
use crate::model::{ContentType, Message, MessageKind, Sender};

pub const WELCOME_TEXT: &str = "Hello! I'm Mr Bukkan, your personal Article & Story Writer. ✍️\n\nI can help you create:\n📰 Articles - Professional content on any topic\n📖 Stories - Creative narratives and fiction\n\nJust tell me what you'd like me to write about!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// A submitted request waiting for its reply. Handing it back to
/// [`ChatSession::complete`] appends the matching bot message.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGeneration {
    pub topic: String,
    pub kind: ContentType,
}

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    next_id: u64,
    input: String,
    content_type: ContentType,
    in_flight: Option<ContentType>,
    rendered: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            input: String::new(),
            content_type: ContentType::default(),
            in_flight: None,
            rendered: 0,
        };
        session.push(WELCOME_TEXT.to_string(), Sender::Bot, MessageKind::Welcome);
        session
    }

    fn push(&mut self, text: String, sender: Sender, kind: MessageKind) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            kind,
            time: Local::now().format("%H:%M").to_string(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn select_content_type(&mut self, kind: ContentType) {
        self.content_type = kind;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Number of user requests; the welcome message never counts.
    pub fn user_request_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_user()).count()
    }

    /// Keystroke handling for the input field. A non-shifted Enter submits,
    /// a shifted one inserts a newline. Enter on blank input discards it.
    /// Input is frozen while loading.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<PendingGeneration> {
        if self.is_loading() {
            return None;
        }
        match event.key {
            Key::Enter if !event.shift => {
                if self.input.trim().is_empty() {
                    self.input.clear();
                }
                self.submit()
            }
            Key::Enter => {
                self.input.push('\n');
                None
            }
            Key::Backspace => {
                self.input.pop();
                None
            }
            Key::Char(c) => {
                self.input.push(c);
                None
            }
        }
    }

    /// Appends the user message and enters loading. `None` when the input is
    /// blank or a request is already in flight.
    pub fn submit(&mut self) -> Option<PendingGeneration> {
        if !self.can_submit() {
            return None;
        }
        let topic = std::mem::take(&mut self.input);
        let kind = self.content_type;
        self.push(topic.clone(), Sender::User, kind.into());
        self.in_flight = Some(kind);
        debug!(content_type = %kind, "submitted request");
        Some(PendingGeneration { topic, kind })
    }

    /// Appends the bot reply for `pending` and leaves loading.
    pub fn complete(&mut self, pending: PendingGeneration, text: String) -> &Message {
        self.in_flight = None;
        self.push(text, Sender::Bot, pending.kind.into())
    }

    /// Submit, call the relay, and append the reply. Returns the bot message,
    /// or `None` if nothing was submitted.
    pub async fn send(&mut self, relay: &RelayClient) -> Option<&Message> {
        let pending = self.submit()?;
        let text = relay.generate(&pending.topic, pending.kind).await;
        Some(self.complete(pending, text))
    }

    pub fn loading_indicator(&self) -> Option<&'static str> {
        self.in_flight.map(|kind| match kind {
            ContentType::Article => "Crafting your article...",
            ContentType::Story => "Writing your story...",
        })
    }

    pub fn status_line(&self) -> &'static str {
        if self.is_loading() {
            "Writing your content..."
        } else {
            "Professional content creation at your service"
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.content_type {
            ContentType::Article => {
                "Enter article topic (e.g., \"Benefits of AI in Healthcare\")"
            }
            ContentType::Story => "Enter story topic (e.g., \"A journey through time\")",
        }
    }

    /// Messages appended since the previous call, oldest first. Keeps the
    /// view scrolled to the newest message.
    pub fn take_unrendered(&mut self) -> &[Message] {
        let start = self.rendered;
        self.rendered = self.messages.len();
        &self.messages[start..]
    }

    fn actionable(&self, id: u64) -> Result<&Message, ActionError> {
        let message = self.message(id).ok_or(ActionError::UnknownMessage(id))?;
        if !message.has_actions() {
            return Err(ActionError::NotActionable(id));
        }
        Ok(message)
    }

    pub fn copy_message(
        &self,
        id: u64,
        clipboard: &mut impl Clipboard,
    ) -> Result<&'static str, ActionError> {
        let message = self.actionable(id)?;
        clipboard.set_text(&message.text)?;
        Ok(COPY_ACK)
    }

    /// Saves the message as `mr-bukkan-<type>-<id>.txt` inside `dir`.
    pub async fn download_message(&self, id: u64, dir: &Path) -> Result<PathBuf, ActionError> {
        let message = self.actionable(id)?;
        save_text(dir, &message.download_filename(), &message.text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
            self.0 = Some(text.to_owned());
            Ok(())
        }
    }

    fn type_text(session: &mut ChatSession, text: &str) {
        for c in text.chars() {
            session.handle_key(KeyEvent::plain(Key::Char(c)));
        }
    }

    #[test]
    fn starts_with_welcome_only() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        let welcome = &session.messages()[0];
        assert_eq!(welcome.id, 1);
        assert_eq!(welcome.kind, MessageKind::Welcome);
        assert_eq!(welcome.sender, Sender::Bot);
        assert_eq!(session.user_request_count(), 0);
        assert!(!session.is_loading());
    }

    #[test]
    fn submit_appends_user_message_and_loads() {
        let mut session = ChatSession::new();
        session.set_input("Benefits of AI in Healthcare");
        let pending = session.submit().unwrap();

        assert_eq!(pending.topic, "Benefits of AI in Healthcare");
        assert_eq!(pending.kind, ContentType::Article);
        assert_eq!(session.input(), "");
        assert!(session.is_loading());
        assert_eq!(session.loading_indicator(), Some("Crafting your article..."));
        assert_eq!(session.status_line(), "Writing your content...");

        let user = session.messages().last().unwrap();
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.kind, MessageKind::Article);
        assert_eq!(user.text, "Benefits of AI in Healthcare");
        assert_eq!(user.id, 2);
    }

    #[test]
    fn blank_input_or_loading_blocks_submit() {
        let mut session = ChatSession::new();
        session.set_input("   ");
        assert!(session.submit().is_none());

        session.set_input("first");
        let pending = session.submit().unwrap();
        session.set_input("second");
        assert!(session.submit().is_none());
        assert_eq!(session.user_request_count(), 1);

        session.complete(pending, "done".into());
        assert!(session.submit().is_some());
        assert_eq!(session.user_request_count(), 2);
    }

    #[test]
    fn complete_appends_one_bot_message_of_submitted_type() {
        let mut session = ChatSession::new();
        session.select_content_type(ContentType::Story);
        session.set_input("A journey through time");
        let pending = session.submit().unwrap();
        session.select_content_type(ContentType::Article);

        let bot = session.complete(pending, "Once upon a time".into()).clone();
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(bot.kind, MessageKind::Story);
        assert_eq!(bot.id, 3);
        assert!(!session.is_loading());
        assert_eq!(session.loading_indicator(), None);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn enter_submits_and_shift_enter_inserts_newline() {
        let mut session = ChatSession::new();
        type_text(&mut session, "line one");
        assert!(session
            .handle_key(KeyEvent::shifted(Key::Enter))
            .is_none());
        type_text(&mut session, "line twoo");
        session.handle_key(KeyEvent::plain(Key::Backspace));
        assert_eq!(session.input(), "line one\nline two");

        let pending = session.handle_key(KeyEvent::plain(Key::Enter)).unwrap();
        assert_eq!(pending.topic, "line one\nline two");

        // frozen while loading
        assert!(session.handle_key(KeyEvent::plain(Key::Char('x'))).is_none());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn blank_enter_discards_whitespace() {
        let mut session = ChatSession::new();
        type_text(&mut session, "   ");
        assert!(session.handle_key(KeyEvent::plain(Key::Enter)).is_none());
        assert_eq!(session.input(), "");

        type_text(&mut session, "hello");
        let pending = session.handle_key(KeyEvent::plain(Key::Enter)).unwrap();
        assert_eq!(pending.topic, "hello");
        assert_eq!(session.messages().last().unwrap().text, "hello");
    }

    #[test]
    fn counter_tracks_user_messages() {
        let mut session = ChatSession::new();
        for (i, topic) in ["a", "b", "c"].iter().enumerate() {
            session.set_input(*topic);
            let pending = session.submit().unwrap();
            session.complete(pending, format!("reply {i}"));
        }
        let users = session.messages().iter().filter(|m| m.is_user()).count();
        assert_eq!(session.user_request_count(), users);
        assert_eq!(session.user_request_count(), 3);
        assert_eq!(session.messages().len(), 7);
    }

    #[test]
    fn take_unrendered_returns_new_messages_once() {
        let mut session = ChatSession::new();
        assert_eq!(session.take_unrendered().len(), 1);
        assert!(session.take_unrendered().is_empty());

        session.set_input("topic");
        let pending = session.submit().unwrap();
        session.complete(pending, "text".into());
        let fresh = session.take_unrendered();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[1].sender, Sender::Bot);
    }

    #[test]
    fn copy_only_on_bot_content() {
        let mut session = ChatSession::new();
        let mut clipboard = MemoryClipboard::default();

        assert!(matches!(
            session.copy_message(1, &mut clipboard),
            Err(ActionError::NotActionable(1))
        ));

        session.set_input("topic");
        let pending = session.submit().unwrap();
        session.complete(pending, "generated body".into());

        assert!(matches!(
            session.copy_message(2, &mut clipboard),
            Err(ActionError::NotActionable(2))
        ));
        assert_eq!(session.copy_message(3, &mut clipboard).unwrap(), COPY_ACK);
        assert_eq!(clipboard.0.as_deref(), Some("generated body"));
        assert!(matches!(
            session.copy_message(42, &mut clipboard),
            Err(ActionError::UnknownMessage(42))
        ));
    }

    #[tokio::test]
    async fn download_writes_exact_text() {
        let dir = std::env::temp_dir().join(format!("mr-bukkan-test-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let mut session = ChatSession::new();
        session.select_content_type(ContentType::Story);
        session.set_input("dragons");
        let pending = session.submit().unwrap();
        let body = "Chapter 1\n\nThe dragon woke. ✨";
        session.complete(pending, body.into());

        let path = session.download_message(3, &dir).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "mr-bukkan-story-3.txt");
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), body);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
