//! Recording collaborator doubles shared by this crate's tests.

use std::collections::BTreeMap;

use story::{CameraPose, Chapter, LonLat, Story, StoryProperties};

use crate::surfaces::{
    AutoplayIcon, GlobeView, NavPane, StorySurfaces, TextField, TimerHost,
};

pub fn three_chapter_story() -> Story {
    let properties = StoryProperties {
        title: "Voyage".to_string(),
        description: "Three stops.".to_string(),
        created_by: Some("R. Holt".to_string()),
        date: Some("2020".to_string()),
        location: LonLat::new(10.0, 50.0),
        camera: CameraPose::new(-20.0, 0.0),
    };
    let chapters = vec![
        Chapter {
            id: "a".to_string(),
            title: "Alpha".to_string(),
            content: "First stop.".to_string(),
            date: Some("May".to_string()),
            place: Some("North".to_string()),
            image: Some("img/a.jpg".to_string()),
            image_credit: Some("N. Adams".to_string()),
            location: LonLat::new(1.0, 51.0),
            camera: CameraPose::new(-45.0, 90.0),
        },
        Chapter {
            id: "b".to_string(),
            title: "Beta".to_string(),
            content: "Second stop.".to_string(),
            date: None,
            place: None,
            image: None,
            image_credit: None,
            location: LonLat::new(2.0, 52.0),
            camera: CameraPose::new(-45.0, 180.0),
        },
        Chapter {
            id: "c".to_string(),
            title: "Gamma".to_string(),
            content: "Last stop.".to_string(),
            date: Some("July".to_string()),
            place: Some("South".to_string()),
            image: None,
            image_credit: None,
            location: LonLat::new(3.0, 53.0),
            camera: CameraPose::new(-45.0, 270.0),
        },
    ];
    Story::new(properties, chapters)
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlobeCall {
    FlyTo {
        target: LonLat,
        duration_ms: u32,
        pose: CameraPose,
    },
    CreateHighlight {
        center: LonLat,
        radius_m: f64,
    },
    RemoveHighlight,
    SetSelectedMarker(Option<usize>),
}

#[derive(Debug, Default)]
pub struct RecordingGlobe {
    pub calls: Vec<GlobeCall>,
}

impl RecordingGlobe {
    pub fn selected_marker(&self) -> Option<usize> {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                GlobeCall::SetSelectedMarker(index) => Some(*index),
                _ => None,
            })
            .flatten()
    }

    /// True if a highlight is live after replaying the recorded calls.
    pub fn highlight_active(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                GlobeCall::CreateHighlight { .. } => Some(true),
                GlobeCall::RemoveHighlight => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl GlobeView for RecordingGlobe {
    fn fly_to(&mut self, target: LonLat, duration_ms: u32, pose: CameraPose) {
        self.calls.push(GlobeCall::FlyTo {
            target,
            duration_ms,
            pose,
        });
    }

    fn create_highlight(&mut self, center: LonLat, radius_m: f64) {
        self.calls.push(GlobeCall::CreateHighlight { center, radius_m });
    }

    fn remove_highlight(&mut self) {
        self.calls.push(GlobeCall::RemoveHighlight);
    }

    fn set_selected_marker(&mut self, index: Option<usize>) {
        self.calls.push(GlobeCall::SetSelectedMarker(index));
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurfaces {
    pub texts: BTreeMap<TextField, String>,
    pub image: Option<String>,
    pub counter: String,
    pub forward_enabled: Option<bool>,
    pub active_pane: Option<NavPane>,
    pub autoplay_icon: Option<AutoplayIcon>,
}

impl RecordingSurfaces {
    pub fn text(&self, field: TextField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl StorySurfaces for RecordingSurfaces {
    fn set_text(&mut self, field: TextField, value: &str) {
        self.texts.insert(field, value.to_string());
    }

    fn set_image(&mut self, url: Option<&str>) {
        self.image = url.map(str::to_string);
    }

    fn set_chapter_counter(&mut self, value: &str) {
        self.counter = value.to_string();
    }

    fn set_forward_enabled(&mut self, enabled: bool) {
        self.forward_enabled = Some(enabled);
    }

    fn set_active_pane(&mut self, pane: NavPane) {
        self.active_pane = Some(pane);
    }

    fn set_autoplay_icon(&mut self, icon: AutoplayIcon) {
        self.autoplay_icon = Some(icon);
    }
}

/// Timer host whose ticks are driven manually by the test, the way the web
/// host's interval callback re-enters the controller.
#[derive(Debug, Default)]
pub struct ManualTimerHost {
    next_id: u32,
    pub active: Option<u32>,
    pub started: Vec<(u32, u32)>,
    pub cancelled: Vec<u32>,
}

impl ManualTimerHost {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

impl TimerHost for ManualTimerHost {
    type Handle = u32;

    fn start_repeating(&mut self, period_ms: u32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(id);
        self.started.push((id, period_ms));
        id
    }

    fn cancel(&mut self, handle: u32) {
        if self.active == Some(handle) {
            self.active = None;
        }
        self.cancelled.push(handle);
    }
}
