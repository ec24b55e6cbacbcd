//! Line input for the terminal chat: slash commands or topic text.

use super::session::{ChatSession, Key, KeyEvent, PendingGeneration};
use crate::model::ContentType;

pub const HELP: &str = "Commands: /article  /story  /copy <id>  /download <id>  /count  /quit\nEnd a line with \\ to continue on the next line.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(ContentType),
    Copy(u64),
    Download(u64),
    Count,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineInput<'a> {
    Command(Command),
    /// A known command with an unusable argument.
    Usage(String),
    /// Topic text. `shifted` marks a trailing `\`, i.e. Shift+Enter.
    Text { text: &'a str, shifted: bool },
}

/// Only the listed commands are intercepted; every other line, including
/// ones that start with `/`, is topic text.
pub fn parse_line(line: &str) -> LineInput<'_> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["/article"] => return LineInput::Command(Command::Select(ContentType::Article)),
        ["/story"] => return LineInput::Command(Command::Select(ContentType::Story)),
        ["/count"] => return LineInput::Command(Command::Count),
        ["/quit"] => return LineInput::Command(Command::Quit),
        [verb @ ("/copy" | "/download"), id] => {
            return match id.parse::<u64>() {
                Ok(id) if *verb == "/copy" => LineInput::Command(Command::Copy(id)),
                Ok(id) => LineInput::Command(Command::Download(id)),
                Err(_) => LineInput::Usage(format!("invalid message id: {id}")),
            };
        }
        _ => {}
    }

    match line.strip_suffix('\\') {
        Some(text) => LineInput::Text {
            text,
            shifted: true,
        },
        None => LineInput::Text {
            text: line,
            shifted: false,
        },
    }
}

/// Types `text` into the session and presses Enter, shifted or not.
pub fn feed_text(
    session: &mut ChatSession,
    text: &str,
    shifted: bool,
) -> Option<PendingGeneration> {
    for c in text.chars() {
        session.handle_key(KeyEvent::plain(Key::Char(c)));
    }
    let enter = if shifted {
        KeyEvent::shifted(Key::Enter)
    } else {
        KeyEvent::plain(Key::Enter)
    };
    session.handle_key(enter)
}
