use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Chapter, Story, StoryProperties};

pub const STORY_CONFIG_VERSION: &str = "1.0";

/// On-disk/on-wire shape of a story config document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StoryConfig {
    version: String,
    properties: StoryProperties,
    #[serde(default)]
    chapters: Vec<Chapter>,
}

#[derive(Debug)]
pub enum StoryConfigError {
    Parse(serde_json::Error),
    UnsupportedVersion(String),
    EmptyChapterId { index: usize },
    DuplicateChapterId(String),
}

impl std::fmt::Display for StoryConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryConfigError::Parse(e) => write!(f, "story config parse error: {e}"),
            StoryConfigError::UnsupportedVersion(v) => {
                write!(f, "unsupported story config version: {v}")
            }
            StoryConfigError::EmptyChapterId { index } => {
                write!(f, "chapter {index} has an empty id")
            }
            StoryConfigError::DuplicateChapterId(id) => {
                write!(f, "duplicate chapter id: {id}")
            }
        }
    }
}

impl std::error::Error for StoryConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoryConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl Story {
    /// Parses and validates a story config document.
    ///
    /// Chapter ids must be non-empty and unique: they are the persisted
    /// navigation identity, so a collision would make two chapters
    /// indistinguishable in the URL. An empty chapter list is valid and
    /// yields an intro-only story.
    pub fn from_json_str(raw: &str) -> Result<Story, StoryConfigError> {
        let config: StoryConfig = serde_json::from_str(raw).map_err(StoryConfigError::Parse)?;
        if config.version != STORY_CONFIG_VERSION {
            return Err(StoryConfigError::UnsupportedVersion(config.version));
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (index, chapter) in config.chapters.iter().enumerate() {
            if chapter.id.trim().is_empty() {
                return Err(StoryConfigError::EmptyChapterId { index });
            }
            if !seen.insert(chapter.id.as_str()) {
                return Err(StoryConfigError::DuplicateChapterId(chapter.id.clone()));
            }
        }

        Ok(Story::new(config.properties, config.chapters))
    }
}
