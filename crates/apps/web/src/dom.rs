//! DOM-backed story surfaces.
//!
//! Elements are addressed by id. A missing element is tolerated as a no-op so
//! host pages can omit optional fields (e.g. a story without images never
//! needs the image slot).

use navigation::{AutoplayIcon, NavPane, StorySurfaces, TextField};
use wasm_bindgen::JsCast;

pub(crate) const START_ID: &str = "story-start";
pub(crate) const BACK_ID: &str = "story-back";
pub(crate) const FORWARD_ID: &str = "story-forward";
pub(crate) const AUTOPLAY_ID: &str = "story-autoplay";

const COUNTER_ID: &str = "story-chapter-counter";
const IMAGE_ID: &str = "story-image";
const INTRO_PANE_ID: &str = "story-intro-pane";
const DETAILS_PANE_ID: &str = "story-details-pane";

const ACTIVE_CLASS: &str = "active";

const PLAY_MARKUP: &str = "<span class=\"icon icon-play\"></span>";
const PAUSE_MARKUP: &str = "<span class=\"icon icon-pause\"></span>";

fn field_id(field: TextField) -> &'static str {
    match field {
        TextField::Title => "story-chapter-title",
        TextField::StoryTitle => "story-title",
        TextField::Content => "story-content",
        TextField::Date => "story-date",
        TextField::Place => "story-place",
        TextField::Attribution => "story-attribution",
    }
}

pub(crate) fn element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn set_text_by_id(id: &str, value: &str) {
    if let Some(el) = element(id) {
        el.set_text_content(Some(value));
    }
}

fn set_pane_active(id: &str, active: bool) {
    let Some(el) = element(id) else { return };
    let classes = el.class_list();
    let _ = if active {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
}

#[derive(Debug, Default)]
pub struct DomSurfaces;

impl DomSurfaces {
    pub fn new() -> Self {
        Self
    }
}

impl StorySurfaces for DomSurfaces {
    fn set_text(&mut self, field: TextField, value: &str) {
        set_text_by_id(field_id(field), value);
    }

    fn set_image(&mut self, url: Option<&str>) {
        let Some(el) = element(IMAGE_ID) else { return };
        let Ok(img) = el.dyn_into::<web_sys::HtmlImageElement>() else {
            return;
        };
        match url {
            Some(url) => {
                img.set_src(url);
                img.set_hidden(false);
            }
            None => {
                img.set_src("");
                img.set_hidden(true);
            }
        }
    }

    fn set_chapter_counter(&mut self, value: &str) {
        set_text_by_id(COUNTER_ID, value);
    }

    fn set_forward_enabled(&mut self, enabled: bool) {
        let Some(el) = element(FORWARD_ID) else { return };
        if let Ok(button) = el.dyn_into::<web_sys::HtmlButtonElement>() {
            button.set_disabled(!enabled);
        }
    }

    fn set_active_pane(&mut self, pane: NavPane) {
        set_pane_active(INTRO_PANE_ID, pane == NavPane::Intro);
        set_pane_active(DETAILS_PANE_ID, pane == NavPane::Details);
    }

    fn set_autoplay_icon(&mut self, icon: AutoplayIcon) {
        let markup = match icon {
            AutoplayIcon::Play => PLAY_MARKUP,
            AutoplayIcon::Pause => PAUSE_MARKUP,
        };
        if let Some(el) = element(AUTOPLAY_ID) {
            el.set_inner_html(markup);
        }
    }
}
