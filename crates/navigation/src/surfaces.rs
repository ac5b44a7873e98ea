use story::{CameraPose, LonLat};

/// The two top-level navigation panes. Exactly one is active at a time; a
/// two-valued enum rather than independent booleans so both-active and
/// neither-active states are unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavPane {
    Intro,
    Details,
}

/// Glyph state of the autoplay control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AutoplayIcon {
    Play,
    Pause,
}

/// Text fields of the story panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextField {
    Title,
    /// The story's own title, shown above a chapter title. Blank in intro
    /// mode, where the story title already occupies [`TextField::Title`].
    StoryTitle,
    Content,
    Date,
    Place,
    Attribution,
}

/// Camera, highlight, and marker commands against the globe collaborator.
///
/// All commands are fire-and-forget: completion is never awaited, and rapid
/// repeated navigation may issue overlapping camera commands. The globe
/// library sequences or interrupts its own animations. Implementations must
/// not block.
pub trait GlobeView {
    fn fly_to(&mut self, target: LonLat, duration_ms: u32, pose: CameraPose);
    fn create_highlight(&mut self, center: LonLat, radius_m: f64);
    fn remove_highlight(&mut self);
    fn set_selected_marker(&mut self, index: Option<usize>);
}

/// Text and control state of the story panel.
pub trait StorySurfaces {
    fn set_text(&mut self, field: TextField, value: &str);
    fn set_image(&mut self, url: Option<&str>);
    fn set_chapter_counter(&mut self, value: &str);
    fn set_forward_enabled(&mut self, enabled: bool);
    fn set_active_pane(&mut self, pane: NavPane);
    fn set_autoplay_icon(&mut self, icon: AutoplayIcon);
}

/// Host for the single repeating autoplay timer.
///
/// The controller holds at most one live handle at a time and cancels it
/// through this trait; ticks re-enter the controller from the host side.
pub trait TimerHost {
    type Handle;

    fn start_repeating(&mut self, period_ms: u32) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}
