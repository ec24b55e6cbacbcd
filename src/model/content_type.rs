use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the writer is asked to produce. Selects the prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Article,
    Story,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Article, ContentType::Story];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Story => "story",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(ContentType::Article),
            "story" => Ok(ContentType::Story),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_only() {
        assert_eq!("article".parse::<ContentType>(), Ok(ContentType::Article));
        assert_eq!("story".parse::<ContentType>(), Ok(ContentType::Story));
        assert_eq!(
            " story ".parse::<ContentType>(),
            Err(UnknownContentType(" story ".into()))
        );
        assert_eq!(
            "poem".parse::<ContentType>(),
            Err(UnknownContentType("poem".into()))
        );
        assert!("Article".parse::<ContentType>().is_err());
    }
}
