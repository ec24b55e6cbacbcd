pub mod actions;
pub mod command;
pub mod relay;
pub mod session;

pub use actions::{ActionError, Clipboard, SystemClipboard, COPY_ACK};
pub use command::{feed_text, parse_line, Command, LineInput, HELP};
pub use relay::{RelayClient, FALLBACK_REPLY};
pub use session::{ChatSession, Key, KeyEvent, PendingGeneration};
