pub mod content_type;
pub mod message;

pub use content_type::{ContentType, UnknownContentType};
pub use message::{Message, MessageKind, Sender};
