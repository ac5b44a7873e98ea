//! The navigation controller: the single source of truth for "current
//! chapter".
//!
//! The current chapter is never cached in a field. It is derived from the
//! persisted parameter on every read, so it cannot drift from the URL and a
//! page reload reconstructs it exactly. The controller's operations mutate
//! the parameter and then re-render every dependent surface from the result.

use story::Story;

use crate::params::{current_chapter_index, ParamError, ParamStore};
use crate::surfaces::{AutoplayIcon, GlobeView, StorySurfaces, TimerHost};
use crate::view;

/// Autoplay advance interval.
pub const AUTOPLAY_PERIOD_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    Param(ParamError),
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationError::Param(e) => write!(f, "{e}"),
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "chapter index {index} out of range ({len} chapters)")
            }
        }
    }
}

impl std::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigationError::Param(e) => Some(e),
            NavigationError::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<ParamError> for NavigationError {
    fn from(e: ParamError) -> Self {
        NavigationError::Param(e)
    }
}

/// Chapter navigation state machine.
///
/// All collaborators are injected at construction; there is no shared global
/// story object. Single-threaded by contract: every transition runs
/// synchronously on the UI event context, and the autoplay timer is a
/// cooperative callback, not a thread.
pub struct NavigationController<P, G, S, T: TimerHost> {
    story: Story,
    params: P,
    globe: G,
    surfaces: S,
    timers: T,
    autoplay: Option<T::Handle>,
}

impl<P, G, S, T> NavigationController<P, G, S, T>
where
    P: ParamStore,
    G: GlobeView,
    S: StorySurfaces,
    T: TimerHost,
{
    pub fn new(story: Story, params: P, globe: G, surfaces: S, timers: T) -> Self {
        Self {
            story,
            params,
            globe,
            surfaces,
            timers,
            autoplay: None,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn globe(&self) -> &G {
        &self.globe
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Current chapter index, derived from the persisted parameter.
    ///
    /// `None` is the intro state; an unmatched parameter value resolves to
    /// `None` as well.
    pub fn current_index(&self) -> Result<Option<usize>, ParamError> {
        current_chapter_index(&self.params, &self.story)
    }

    /// Brings every surface in sync with the persisted parameter.
    ///
    /// Called exactly once at startup; calling it twice is outside the
    /// contract. An unmatched or absent parameter renders the intro without
    /// rewriting the parameter, so a shared link with a stale chapter id
    /// keeps its URL.
    pub fn initialize(&mut self) -> Result<(), NavigationError> {
        match self.current_index()? {
            Some(index) => self.enter_chapter(index),
            None => {
                self.render_intro_surfaces();
                Ok(())
            }
        }
    }

    /// Jumps to a chapter. The sole mutator of "current chapter".
    ///
    /// `index` must be within `0..chapter_count`; anything else is internal
    /// misuse and reported as [`NavigationError::IndexOutOfRange`].
    pub fn go_to_chapter(&mut self, index: usize) -> Result<(), NavigationError> {
        self.stop_autoplay();
        self.enter_chapter(index)
    }

    /// One step forward. At the last chapter this is a no-op; it never wraps.
    pub fn advance(&mut self) -> Result<(), NavigationError> {
        self.stop_autoplay();
        self.step_forward()
    }

    /// One step back. From chapter 0 and from the intro this falls through
    /// to [`Self::reset_to_intro`]: retreating past the first chapter is the
    /// way back to the introduction.
    pub fn retreat(&mut self) -> Result<(), NavigationError> {
        self.stop_autoplay();
        match self.current_index()? {
            Some(index) if index >= 1 => self.enter_chapter(index - 1),
            _ => self.reset_to_intro(),
        }
    }

    /// Clears the chapter parameter and restores the overview: marker
    /// deselected, highlight removed, intro pane active, camera on the
    /// story's overview pose.
    pub fn reset_to_intro(&mut self) -> Result<(), NavigationError> {
        self.params.clear()?;
        self.render_intro_surfaces();
        Ok(())
    }

    /// Starts autoplay if it is stopped, stops it if it is running.
    pub fn toggle_autoplay(&mut self) {
        if self.autoplay.is_some() {
            self.stop_autoplay();
        } else {
            let handle = self.timers.start_repeating(AUTOPLAY_PERIOD_MS);
            self.autoplay = Some(handle);
            self.surfaces.set_autoplay_icon(AutoplayIcon::Pause);
        }
    }

    /// One autoplay advance. Called by the timer host on every tick.
    ///
    /// Stops the timer on reaching the last chapter; autoplay never wraps
    /// back to the start.
    pub fn autoplay_tick(&mut self) -> Result<(), NavigationError> {
        if self.story.chapter_count() == 0 {
            self.stop_autoplay();
            return Ok(());
        }
        self.step_forward()?;
        if let Some(index) = self.current_index()? {
            if self.story.is_last(index) {
                self.stop_autoplay();
            }
        }
        Ok(())
    }

    /// Cancels the timer and restores the play glyph. Safe to call when
    /// already stopped.
    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.timers.cancel(handle);
        }
        self.surfaces.set_autoplay_icon(AutoplayIcon::Play);
    }

    /// Advance without touching the timer; shared by the manual path (which
    /// cancels autoplay first) and the tick path (which must not cancel its
    /// own timer).
    fn step_forward(&mut self) -> Result<(), NavigationError> {
        let next = match self.current_index()? {
            None => 0,
            Some(index) => index + 1,
        };
        if next < self.story.chapter_count() {
            self.enter_chapter(next)
        } else {
            Ok(())
        }
    }

    fn enter_chapter(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.story.chapter_count();
        let Some(chapter) = self.story.chapter(index) else {
            return Err(NavigationError::IndexOutOfRange { index, len });
        };
        self.params.set(&chapter.id)?;
        self.globe.set_selected_marker(Some(index));
        view::render_chapter(&self.story, index, chapter, &mut self.globe, &mut self.surfaces);
        Ok(())
    }

    fn render_intro_surfaces(&mut self) {
        self.globe.set_selected_marker(None);
        view::render_intro(&self.story, &mut self.globe, &mut self.surfaces);
    }
}
