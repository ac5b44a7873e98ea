pub mod config;

pub use config::*;

use serde::{Deserialize, Serialize};

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl LonLat {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Camera framing for a chapter or for the story overview.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub pitch_deg: f64,
    pub heading_deg: f64,
    #[serde(default)]
    pub roll_deg: f64,
}

impl CameraPose {
    pub fn new(pitch_deg: f64, heading_deg: f64) -> Self {
        Self {
            pitch_deg,
            heading_deg,
            roll_deg: 0.0,
        }
    }
}

/// One narrative unit, anchored to a location.
///
/// Immutable once loaded; owned by the [`Story`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable identity. This is the value persisted in the URL parameter.
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_credit: Option<String>,
    pub location: LonLat,
    pub camera: CameraPose,
}

/// Story-level overview record: the intro analog of a [`Chapter`].
///
/// Same display-shape subset as a chapter, but it carries no navigational id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryProperties {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub location: LonLat,
    pub camera: CameraPose,
}

/// The chapter store: an ordered chapter sequence plus the story properties.
///
/// Populated once at startup from config and never mutated thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    properties: StoryProperties,
    chapters: Vec<Chapter>,
}

impl Story {
    pub fn new(properties: StoryProperties, chapters: Vec<Chapter>) -> Self {
        Self {
            properties,
            chapters,
        }
    }

    pub fn properties(&self) -> &StoryProperties {
        &self.properties
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Resolves a chapter id to its position in the sequence.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }

    /// True exactly for the last valid index. Always false for an empty story.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.chapters.len()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.chapters.len().checked_sub(1)
    }
}
