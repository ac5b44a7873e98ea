//! Renders every dependent UI surface from one (index, chapter-or-intro)
//! pair. Rendering is total: each call re-derives every field, the counter,
//! forward enablement, and the active pane, so surfaces can never drift from
//! the navigation state they were rendered from.

use story::{Chapter, Story};

use crate::surfaces::{GlobeView, NavPane, StorySurfaces, TextField};

/// Camera fly duration when returning to the story overview.
pub const FLY_TO_INTRO_MS: u32 = 2_000;
/// Camera fly duration when jumping to a chapter.
pub const FLY_TO_CHAPTER_MS: u32 = 2_800;
/// Radius of the location highlight shown in detail mode.
pub const HIGHLIGHT_RADIUS_M: f64 = 25_000.0;

/// Renders the detail view for `chapter` at `index`.
pub fn render_chapter<G: GlobeView, S: StorySurfaces>(
    story: &Story,
    index: usize,
    chapter: &Chapter,
    globe: &mut G,
    surfaces: &mut S,
) {
    surfaces.set_text(TextField::Title, &chapter.title);
    surfaces.set_text(TextField::StoryTitle, &story.properties().title);
    surfaces.set_text(TextField::Content, &chapter.content);
    surfaces.set_text(TextField::Date, chapter.date.as_deref().unwrap_or(""));
    surfaces.set_text(TextField::Place, chapter.place.as_deref().unwrap_or(""));
    let attribution = chapter
        .image_credit
        .as_deref()
        .map(|credit| format!("Image: {credit}"))
        .unwrap_or_default();
    surfaces.set_text(TextField::Attribution, &attribution);
    surfaces.set_image(chapter.image.as_deref());

    surfaces.set_chapter_counter(&format!("{} / {}", index + 1, story.chapter_count()));
    surfaces.set_forward_enabled(!story.is_last(index));
    surfaces.set_active_pane(NavPane::Details);

    globe.fly_to(chapter.location, FLY_TO_CHAPTER_MS, chapter.camera);
    globe.create_highlight(chapter.location, HIGHLIGHT_RADIUS_M);
}

/// Renders the intro view from the story properties.
///
/// The author/date byline renders only here; a chapter render overwrites the
/// date with the chapter's own and blanks the author attribution unless the
/// chapter carries an image credit.
pub fn render_intro<G: GlobeView, S: StorySurfaces>(
    story: &Story,
    globe: &mut G,
    surfaces: &mut S,
) {
    let props = story.properties();

    surfaces.set_text(TextField::Title, &props.title);
    surfaces.set_text(TextField::StoryTitle, "");
    surfaces.set_text(TextField::Content, &props.description);
    surfaces.set_text(TextField::Date, props.date.as_deref().unwrap_or(""));
    surfaces.set_text(TextField::Place, "");
    let attribution = props
        .created_by
        .as_deref()
        .map(|author| format!("Created by {author}"))
        .unwrap_or_default();
    surfaces.set_text(TextField::Attribution, &attribution);
    surfaces.set_image(None);

    surfaces.set_chapter_counter("");
    surfaces.set_forward_enabled(true);
    surfaces.set_active_pane(NavPane::Intro);

    globe.remove_highlight();
    globe.fly_to(props.location, FLY_TO_INTRO_MS, props.camera);
}
