use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::{fs::File, io::AsyncWriteExt};

pub const COPY_ACK: &str = "Content copied to clipboard!";

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no message with id {0}")]
    UnknownMessage(u64),

    #[error("message {0} has no copy/download actions")]
    NotActionable(u64),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for the copy action.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError>;
}

/// System clipboard. Opened per copy so a headless terminal only fails the
/// action, not the whole client.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ActionError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ActionError::Clipboard(e.to_string()))
    }
}

/// Writes `text` byte-for-byte to `dir/filename`.
pub async fn save_text(dir: &Path, filename: &str, text: &str) -> Result<PathBuf, ActionError> {
    let path = dir.join(filename);
    let io_err = |source| ActionError::Io {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).await.map_err(io_err)?;
    file.write_all(text.as_bytes()).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;

    Ok(path)
}
